use crate::utils::config::STATISTICS_ROUTE;

/// Display version information
pub fn display_version() {
    println!("Profile Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Endpoint: POST {}", STATISTICS_ROUTE);
    println!();
    println!("Descriptive statistics over batches of user profiles.");
}
