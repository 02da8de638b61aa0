use std::env;
use std::path::PathBuf;

use crate::error::UpdateError;

pub const USAGE: &str = "Usage: update-version <file_path> <version>";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub file_path: PathBuf,
    pub version: String,
}

impl Args {
    /// Parses the process arguments, printing usage and exiting with 1 on a
    /// wrong argument count.
    pub fn parse() -> Self {
        match Self::try_parse_from(env::args().skip(1)) {
            Ok(args) => args,
            Err(error) => {
                println!("{}", error);
                std::process::exit(1);
            }
        }
    }

    /// Any two arguments are taken as file and version, whatever they look like.
    pub fn try_parse_from<I, S>(args: I) -> Result<Self, UpdateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let [file_path, version]: [String; 2] = args
            .try_into()
            .map_err(|_| UpdateError::Usage(USAGE.to_string()))?;

        Ok(Self {
            file_path: PathBuf::from(file_path),
            version,
        })
    }
}
