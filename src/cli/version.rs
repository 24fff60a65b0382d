use crate::error::CheckRedirectsResult;

pub fn run() -> CheckRedirectsResult<()> {
    println!("check-redirects {}", env!("CARGO_PKG_VERSION"));
    println!("Version: {}", crate::get_version());
    Ok(())
}
