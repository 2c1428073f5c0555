use clap::Parser;
use std::path::PathBuf;

use pdf_protector::{FailurePolicy, ProtectionConfig};

const BANNER: &str = "\
+---------------+
| pdf-protector |
+---------------+

A program for applying (and removing) password protection to PDF document(s).";

#[derive(Parser, Debug)]
#[command(
    name = "pdf-protector",
    version,
    about = "Apply, replace or remove password protection on PDF documents",
    before_help = BANNER,
    override_usage = "pdf-protector [options] file1.pdf file2.pdf file3.pdf ..."
)]
pub struct CliArgs {
    /// Input PDF document(s), processed in the order given
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Launch a graphical user interface
    #[arg(short, long, default_value_t = false)]
    pub gui: bool,

    /// Password used to open the input PDF document(s), if needed
    #[arg(
        short = 'e',
        long = "existingpassword",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub existing_password: String,

    /// Password used to protect the output PDF document(s)
    #[arg(
        short = 'p',
        long = "newpassword",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub new_password: String,

    /// Location for saving output PDF document(s): a directory, or a file for a single input
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite pre-existing PDF document(s) of the same name in the output location
    #[arg(short = 'f', long, default_value_t = false)]
    pub overwrite: bool,

    /// Keep processing remaining documents after a failure
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print the batch report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> ProtectionConfig {
        let failure_policy = if self.continue_on_error {
            FailurePolicy::ContinueOnError
        } else {
            FailurePolicy::FailFast
        };

        ProtectionConfig::new(self.inputs.iter().cloned())
            .with_existing_password(self.existing_password.as_str())
            .with_new_password(self.new_password.as_str())
            .with_output(self.output.clone())
            .with_overwrite(self.overwrite)
            .with_failure_policy(failure_policy)
    }
}
