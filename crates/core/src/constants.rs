/// Fallback number of fractional digits when a currency is not in the
/// known-currency table.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
