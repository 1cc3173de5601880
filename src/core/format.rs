//! Display helpers shared by every view of the reference data.
//!
//! These produce plain strings; embeds and menus are assembled by the bot
//! layer.

/// Sentinel shown for skills without a duration.
pub const NO_DURATION_SECONDS: f64 = -1.0;

/// Label used when an effect code is not in [`effect_type_name`]'s table.
pub const UNKNOWN_EFFECT: &str = "不明な効果";

/// Renders a rarity: labels made only of decimal digits (ASCII or
/// full-width) become `星N`, anything else (support tiers like `SSR`,
/// roman numerals) is kept as is.
#[must_use]
pub fn rarity_label(rare: &str) -> String {
    if !rare.is_empty() && rare.chars().all(is_decimal_digit) {
        format!("星{rare}")
    } else {
        rare.to_string()
    }
}

const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '０'..='９')
}

/// Converts a raw ability time (1/10000 s units) to seconds.
/// Non-positive values mean "not applicable" and map to `-1`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ability_time_seconds(ability_time: i64) -> f64 {
    if ability_time > 0 {
        ability_time as f64 / 10_000.0
    } else {
        NO_DURATION_SECONDS
    }
}

/// `"3秒"`, `"2.4秒"`, `"-1秒"`.
#[must_use]
pub fn format_ability_time(ability_time: i64) -> String {
    format!("{}秒", ability_time_seconds(ability_time))
}

/// `"[name] charaName"`
#[must_use]
pub fn entity_label(name: &str, chara_name: &str) -> String {
    format!("[{name}] {chara_name}")
}

/// `"SSR [name] charaName"` for support cards, which show their tier verbatim.
#[must_use]
pub fn support_label(rare: &str, name: &str, chara_name: &str) -> String {
    format!("{rare} {}", entity_label(name, chara_name))
}

/// Absolute thumbnail URL for a relative feed image path.
#[must_use]
pub fn image_url(base: &str, img_url: &str) -> Option<String> {
    if img_url.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}?raw=true",
        base.trim_end_matches('/'),
        img_url.trim_start_matches('/')
    ))
}

/// Japanese name of a skill effect code.
#[must_use]
pub const fn effect_type_name(code: i64) -> &'static str {
    match code {
        1 => "スピード",
        2 => "スタミナ",
        3 => "パワー",
        4 => "根性",
        5 => "賢さ",
        6 => "作戦・脚質適性",
        8 => "視野",
        9 => "体力回復",
        10 => "ゲート出遅れ時間",
        13 => "掛かり時間",
        14 => "スタート時加速",
        21 => "現在速度",
        22 => "現在速度(減速あり)",
        27 => "目標速度",
        28 => "レーン移動速度",
        31 => "加速度",
        35 => "レーン変更",
        _ => UNKNOWN_EFFECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_rarity_gets_star_prefix() {
        assert_eq!(rarity_label("3"), "星3");
        assert_eq!(rarity_label("1"), "星1");
    }

    #[test]
    fn test_non_numeric_rarity_is_verbatim() {
        assert_eq!(rarity_label("SSR"), "SSR");
        assert_eq!(rarity_label("3+"), "3+");
        assert_eq!(rarity_label(""), "");
    }

    #[test]
    fn test_only_decimal_digits_count_as_numeric() {
        assert_eq!(rarity_label("Ⅲ"), "Ⅲ");
        assert_eq!(rarity_label("½"), "½");
        assert_eq!(rarity_label("²"), "²");
        assert_eq!(rarity_label("３"), "星３");
    }

    #[test]
    fn test_ability_time_divides_by_ten_thousand() {
        assert_eq!(format_ability_time(30_000), "3秒");
        assert_eq!(format_ability_time(24_000), "2.4秒");
    }

    #[test]
    fn test_non_positive_ability_time_is_sentinel() {
        assert_eq!(format_ability_time(-1), "-1秒");
        assert_eq!(format_ability_time(0), "-1秒");
        assert_eq!(format_ability_time(-500), "-1秒");
    }

    #[test]
    fn test_labels() {
        assert_eq!(entity_label("特攻", "ゴールドシップ"), "[特攻] ゴールドシップ");
        assert_eq!(
            support_label("SR", "特攻", "ゴールドシップ"),
            "SR [特攻] ゴールドシップ"
        );
    }

    #[test]
    fn test_image_url_joins_cleanly() {
        assert_eq!(
            image_url("https://example.com/public/", "/img/skill.png").as_deref(),
            Some("https://example.com/public/img/skill.png?raw=true")
        );
        assert!(image_url("https://example.com", "").is_none());
    }

    #[test]
    fn test_unknown_effect_code() {
        assert_eq!(effect_type_name(27), "目標速度");
        assert_eq!(effect_type_name(9999), UNKNOWN_EFFECT);
    }
}
