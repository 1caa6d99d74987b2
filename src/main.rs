use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use secure_epayments::builder::build_response;
use secure_epayments::document::ResponseDocument;
use secure_epayments::fraud::FraudFilter;
use secure_epayments::operation::Operation;
use std::path::PathBuf;

/// Normalizes a provider response document into the canonical result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Provider response XML file
    input: PathBuf,

    /// Operation the response belongs to
    #[arg(long, value_enum, default_value_t = OperationArg::Authorize)]
    operation: OperationArg,

    /// Mark the response as coming from the test environment
    #[arg(long)]
    test: bool,

    /// Extra return codes to treat as fraud-suspected (repeatable)
    #[arg(long = "fraud-code")]
    fraud_codes: Vec<i64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OperationArg {
    Authorize,
    Capture,
    Void,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Authorize => Operation::Authorize,
            OperationArg::Capture => Operation::Capture,
            OperationArg::Void => Operation::Void,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let xml = std::fs::read_to_string(&cli.input).into_diagnostic()?;
    let doc = ResponseDocument::parse(&xml).into_diagnostic()?;

    let mut fraud_filter = FraudFilter::default();
    for code in cli.fraud_codes {
        fraud_filter.insert(code);
    }

    let response = build_response(&doc, cli.operation.into(), &fraud_filter, cli.test);
    let json = serde_json::to_string_pretty(&response).into_diagnostic()?;
    println!("{json}");

    Ok(())
}
