use eventboard::utils::color::parse_hex_color;
use ratatui::style::Color;

#[test]
fn test_parse_hex_color() {
    assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_hex_color("FF8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_hex_color(" #000000 "), Some(Color::Rgb(0, 0, 0)));
}

#[test]
fn test_reject_malformed_colors() {
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#gg0000"), None);
    assert_eq!(parse_hex_color("red"), None);
    assert_eq!(parse_hex_color(""), None);
}
