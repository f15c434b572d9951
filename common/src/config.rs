pub const DEFAULT_HOTEL_NAME: &str = "Sample Hotel";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name printed in the hotel report.
    pub hotel_name: String,
    /// Populates the startup inventory of rooms and bookings.
    ///
    /// Disabled with `--no-seed`, which leaves an empty hotel.
    pub seed: bool,
    pub no_banner: bool,
    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotel_name: String::from(DEFAULT_HOTEL_NAME),
            seed: true,
            no_banner: false,
            verbosity: 0,
        }
    }
}
