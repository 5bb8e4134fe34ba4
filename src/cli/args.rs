//! CLI argument parsing

use crate::services::filter::SortBy;

/// Default number of failures listed in summary mode
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Summary,
    Details,
    Json,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub report: String,
    pub keywords: Vec<String>,
    pub feature: Option<String>,
    pub limit: usize,
    pub sort: Option<SortBy>,
    pub mode: OutputMode,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            report: String::new(),
            keywords: Vec::new(),
            feature: None,
            limit: DEFAULT_LIMIT,
            sort: None,
            mode: OutputMode::Summary,
        }
    }
}

/// Parse command line arguments (`args[0]` is the program name)
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli_args = CliArgs::default();
    let mut details = false;
    let mut json = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--feature" => {
                i += 1;
                if i >= args.len() {
                    return Err("--feature requires a value".to_string());
                }
                cli_args.feature = Some(args[i].clone());
            }
            "--limit" => {
                i += 1;
                if i >= args.len() {
                    return Err("--limit requires a value".to_string());
                }
                cli_args.limit = args[i]
                    .parse()
                    .map_err(|_| "--limit must be a non-negative integer".to_string())?;
            }
            "--sort" => {
                i += 1;
                if i >= args.len() {
                    return Err("--sort requires a value".to_string());
                }
                cli_args.sort = Some(args[i].parse()?);
            }
            "--details" => {
                details = true;
            }
            "--json" => {
                json = true;
            }
            arg if !arg.starts_with("--") => {
                if cli_args.report.is_empty() {
                    cli_args.report = arg.to_string();
                } else {
                    cli_args.keywords.push(arg.to_string());
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if cli_args.report.is_empty() {
        return Err("Missing required argument: REPORT".to_string());
    }

    cli_args.mode = match (details, json) {
        (true, true) => return Err("--details and --json cannot be combined".to_string()),
        (true, false) => OutputMode::Details,
        (false, true) => OutputMode::Json,
        (false, false) => OutputMode::Summary,
    };

    Ok(cli_args)
}
