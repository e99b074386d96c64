mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sheet_impose::{
    CalculationResult, DocumentSize, Gutter, ImpositionInputs, Orientation, PerSide, Readout,
    SheetSize, Size, Unit,
};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "simpose", about = "Sheet imposition calculator", version)]
struct Cli {
    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a job given as JSON and print the full result as JSON
    Compute {
        /// Job file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Unit the job's lengths are written in
        #[arg(long, default_value = "in", value_enum)]
        units: UnitArg,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Lay out a job from flags and print an operator summary
    Plan {
        /// Press sheet size
        #[arg(long, default_value = "12x18", value_enum)]
        sheet: SheetArg,

        /// Sheet orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Custom sheet width (overrides the preset)
        #[arg(long)]
        sheet_width: Option<f64>,

        /// Custom sheet height (overrides the preset)
        #[arg(long)]
        sheet_height: Option<f64>,

        /// Finished document size
        #[arg(long, default_value = "business-card", value_enum)]
        document: DocumentArg,

        /// Custom document width (overrides the preset)
        #[arg(long)]
        doc_width: Option<f64>,

        /// Custom document height (overrides the preset)
        #[arg(long)]
        doc_height: Option<f64>,

        /// Gutter between documents on both axes
        #[arg(long, default_value = "0.125")]
        gutter: f64,

        /// Margin on all sides
        #[arg(long, default_value = "0.0")]
        margin: f64,

        /// Non-printable band on all sides
        #[arg(long, default_value = "0.0625")]
        non_printable: f64,

        /// Keep the requested margins instead of centering the grid
        #[arg(long)]
        manual_margins: bool,

        /// Cap the number of documents across
        #[arg(long)]
        force_across: Option<u32>,

        /// Cap the number of documents down
        #[arg(long)]
        force_down: Option<u32>,

        /// Horizontal score fractions, comma separated
        #[arg(long, value_delimiter = ',')]
        score_h: Vec<f64>,

        /// Vertical score fractions, comma separated
        #[arg(long, value_delimiter = ',')]
        score_v: Vec<f64>,

        /// Horizontal perforation fractions, comma separated
        #[arg(long, value_delimiter = ',')]
        perf_h: Vec<f64>,

        /// Vertical perforation fractions, comma separated
        #[arg(long, value_delimiter = ',')]
        perf_v: Vec<f64>,

        /// Documents to produce (reports sheets required)
        #[arg(long)]
        quantity: Option<u64>,

        /// Unit for every length given on the command line
        #[arg(long, default_value = "in", value_enum)]
        units: UnitArg,

        /// Also write the job as JSON to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    In,
    Mm,
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    Letter,
    Legal,
    Tabloid,
    #[value(name = "12x18")]
    Digital12x18,
    #[value(name = "13x19")]
    Super13x19,
    Sra3,
    A3,
    A4,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum DocumentArg {
    BusinessCard,
    Postcard,
    Invitation,
    A6,
    A5,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::In => Self::Inches,
            UnitArg::Mm => Self::Millimeters,
        }
    }
}

impl From<SheetArg> for SheetSize {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Letter => Self::Letter,
            SheetArg::Legal => Self::Legal,
            SheetArg::Tabloid => Self::Tabloid,
            SheetArg::Digital12x18 => Self::Tabloid12x18,
            SheetArg::Super13x19 => Self::Super13x19,
            SheetArg::Sra3 => Self::Sra3,
            SheetArg::A3 => Self::A3,
            SheetArg::A4 => Self::A4,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<DocumentArg> for DocumentSize {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::BusinessCard => Self::BusinessCard,
            DocumentArg::Postcard => Self::Postcard,
            DocumentArg::Invitation => Self::Invitation,
            DocumentArg::A6 => Self::A6,
            DocumentArg::A5 => Self::A5,
        }
    }
}

/// A preset size, with either dimension overridden by a length typed in
/// `unit`. Presets are inches, so overrides are converted back to that
/// unit before the whole job is converted on ingress.
fn sized(preset: Size, width: Option<f64>, height: Option<f64>, unit: Unit) -> Size {
    Size::new(
        width.unwrap_or(unit.from_inches(preset.width)),
        height.unwrap_or(unit.from_inches(preset.height)),
    )
}

fn print_readouts(title: &str, readouts: &[Readout]) {
    if readouts.is_empty() {
        return;
    }
    println!("{}:", title);
    for readout in readouts {
        println!(
            "  {}: {:.3} in ({:.2} mm)",
            readout.label, readout.inches, readout.millimeters
        );
    }
}

/// Print the job summary, with sheet, document and margins in `unit`.
fn print_summary(result: &CalculationResult, unit: Unit, quantity: Option<u64>) {
    let layout = &result.layout;
    let sheet = layout.sheet();
    let doc = layout.document();
    let margins = layout.realized_margins;
    let stats = &result.statistics;
    let len = |inches: f64| unit.from_inches(inches);
    let suffix = unit.suffix();

    println!("Imposition Summary:");
    println!(
        "  Sheet: {:.3} x {:.3} {}",
        len(sheet.raw_width),
        len(sheet.raw_height),
        suffix
    );
    println!(
        "  Document: {:.3} x {:.3} {}",
        len(doc.width),
        len(doc.height),
        suffix
    );
    println!(
        "  Layout: {} across x {} down ({} per sheet)",
        layout.counts.across, layout.counts.down, stats.documents_per_sheet
    );
    println!(
        "  Margins ({}): top {:.4}, right {:.4}, bottom {:.4}, left {:.4}",
        suffix,
        len(margins.top),
        len(margins.right),
        len(margins.bottom),
        len(margins.left)
    );
    println!("  Utilization: {:.1}%", stats.utilization * 100.0);
    if let Some(quantity) = quantity {
        match stats.sheets_required(quantity) {
            Some(sheets) => println!("  Sheets for {}: {}", quantity, sheets),
            None => println!("  Sheets for {}: nothing fits", quantity),
        }
    }

    if layout.counts.is_empty() {
        log::warn!("No documents fit on the sheet");
    }

    let finishing = &result.finishing;
    print_readouts("Cuts", &finishing.cuts);
    print_readouts("Slits", &finishing.slits);
    print_readouts("Horizontal scores", &finishing.scores.horizontal);
    print_readouts("Vertical scores", &finishing.scores.vertical);
    print_readouts("Horizontal perforations", &finishing.perforations.horizontal);
    print_readouts("Vertical perforations", &finishing.perforations.vertical);

    println!("Program:");
    for step in &result.program_sequence {
        println!(
            "  {}: {:.4} in ({:.2} mm)",
            step.label, step.inches, step.millimeters
        );
    }
}

async fn read_job(input: Option<PathBuf>) -> Result<ImpositionInputs> {
    let inputs = match input {
        Some(path) => {
            log::info!("Loading job: {}", path.display());
            ImpositionInputs::load(&path).await?
        }
        None => {
            let mut json = String::new();
            tokio::io::stdin().read_to_string(&mut json).await?;
            ImpositionInputs::from_json(&json)?
        }
    };
    Ok(inputs)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Compute {
            input,
            units,
            pretty,
        } => {
            let inputs = read_job(input).await?.in_units(units.into());
            let result = sheet_impose::compute(&inputs);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
        }

        Commands::Plan {
            sheet,
            orientation,
            sheet_width,
            sheet_height,
            document,
            doc_width,
            doc_height,
            gutter,
            margin,
            non_printable,
            manual_margins,
            force_across,
            force_down,
            score_h,
            score_v,
            perf_h,
            perf_v,
            quantity,
            units,
            save,
        } => {
            let unit: Unit = units.into();
            let sheet_preset = SheetSize::from(sheet).size(orientation.into());
            let doc_preset = DocumentSize::from(document).size();

            let mut inputs = ImpositionInputs {
                sheet: sized(sheet_preset, sheet_width, sheet_height, unit),
                document: sized(doc_preset, doc_width, doc_height, unit),
                gutter: Gutter::uniform(gutter),
                margins: PerSide::uniform(margin),
                non_printable: PerSide::uniform(non_printable),
                auto_margins: !manual_margins,
                force_across,
                force_down,
                ..Default::default()
            }
            .in_units(unit);
            inputs.finishing.score_horizontal = score_h;
            inputs.finishing.score_vertical = score_v;
            inputs.finishing.perforation_horizontal = perf_h;
            inputs.finishing.perforation_vertical = perf_v;

            if let Some(path) = save {
                inputs.save(&path).await?;
                log::info!("Job saved to {}", path.display());
            }

            let result = sheet_impose::compute(&inputs);
            print_summary(&result, unit, quantity);
        }
    }

    Ok(())
}
