use anyhow::Error;
use fonefmt_config::ConfigError;
use fonefmt_table::TableError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            };
        }
        if let Some(table_err) = cause.downcast_ref::<TableError>() {
            return table_exit_code(table_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn table_exit_code(err: &TableError) -> u8 {
    match err {
        TableError::MissingColumn(_) => EXIT_NOT_FOUND,
        TableError::Csv(_)
        | TableError::Decode(_)
        | TableError::UnsupportedFormat(_)
        | TableError::EmptyInput
        | TableError::TooLarge(_) => EXIT_INVALID_INPUT,
        TableError::Io(_) => EXIT_FAILURE,
        #[cfg(feature = "xlsx")]
        TableError::XlsxRead(_) => EXIT_INVALID_INPUT,
        #[cfg(feature = "xlsx")]
        TableError::XlsxWrite(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidPhoneColumn(_)
        | ConfigError::InvalidOutputSuffix(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
