use crate::project_identity;

pub fn version_line() -> String {
    format!(
        "{} version {}",
        project_identity::BINARY_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn run() -> i32 {
    println!("{}", version_line());
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_names_binary_and_crate_version() {
        assert_eq!(
            version_line(),
            format!("pkgx version {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
