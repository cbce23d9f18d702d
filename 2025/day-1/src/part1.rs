use miette::*;

use crate::dial::DialConfig;
use crate::password::process_str;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let password = process_str(input, DialConfig::default())?;
    Ok(password.resets.to_string())
}
