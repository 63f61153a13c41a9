/// Number of decimal places of FIL (1 FIL = 10^18 attoFIL).
pub const FILECOIN_DECIMALS: u32 = 18;

/// Render an integer amount of base units as a decimal string, trimming trailing zeros.
pub fn format_token_amount(amount: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = amount / scale;
    let fraction = amount % scale;

    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(0, FILECOIN_DECIMALS), "0");
        assert_eq!(format_token_amount(1_000_000_000_000_000_000, FILECOIN_DECIMALS), "1");
        assert_eq!(format_token_amount(1_500_000_000_000_000_000, FILECOIN_DECIMALS), "1.5");
        assert_eq!(format_token_amount(1, FILECOIN_DECIMALS), "0.000000000000000001");
        assert_eq!(format_token_amount(123, 0), "123");
    }
}
