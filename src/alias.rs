//! Fixed cyclic name tables for zodiac signs, months, days and years.

/// Zodiac animal names; index 0 corresponds to 鼠 (years ≡ 4 mod 12).
pub const ANIMAL_SIGNS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Lunar month names; the first month is 正, the last two 冬 and 腊.
pub const MONTH_ALIASES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// Day names in traditional ordinal form, 初一 through 三十.
pub const DAY_ALIASES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// The ten celestial stems (天干).
pub const CELESTIAL_STEMS: [&str; 10] = [
    "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸",
];

/// The twelve terrestrial branches (地支).
pub const TERRESTRIAL_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Display name for a zodiac index in 0..=11.
pub fn animal_sign_alias(index: u32) -> &'static str {
    ANIMAL_SIGNS[index as usize % 12]
}

/// Display name for a displayed month number in 1..=12.
pub fn month_alias(month: u32) -> &'static str {
    MONTH_ALIASES[(month as usize - 1) % 12]
}

/// Display name for a day number in 1..=30.
pub fn day_alias(day: u32) -> &'static str {
    DAY_ALIASES[(day as usize - 1) % 30]
}

/// Sexagenary (干支) name of a year: stem cycles every 10 years, branch
/// every 12, both anchored so that year 4 is 甲子.
pub fn sexagenary_alias(year: i32) -> String {
    let stem = (year - 4).rem_euclid(10) as usize;
    let branch = (year - 4).rem_euclid(12) as usize;
    format!("{}{}", CELESTIAL_STEMS[stem], TERRESTRIAL_BRANCHES[branch])
}
