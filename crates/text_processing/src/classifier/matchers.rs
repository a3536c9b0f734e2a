//! Promotion matchers
//!
//! Each matcher owns its pattern and its arithmetic, and returns `None` when
//! either the pattern does not match or a numeric precondition fails.
//! Idiom-specific overrides (千 → 1000, 百 → 100, 半 → 5) live here as guard
//! clauses rather than in the numeral table.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::PromotionText;
use crate::format::{discount_label, fixed, plain, round_half_up};
use crate::numeral::{normalize, parse_decimal_prefix};
use promo_decoder_core::{PromotionResult, PromotionType};

/// A single promotion pattern
pub type Matcher = fn(&PromotionText) -> Option<PromotionResult>;

/// Matchers in priority order
pub const MATCHERS: &[(PromotionType, Matcher)] = &[
    (PromotionType::Threshold, threshold),
    (PromotionType::AddOne, add_one),
    (PromotionType::NthSave, nth_save),
    (PromotionType::Bogo, bogo),
    (PromotionType::NthItem, nth_item),
    (PromotionType::BuyAGetB, buy_a_get_b),
    (PromotionType::GroupDisc, group_discount),
    (PromotionType::Simple, simple),
];

/// Numeral token: digits, decimal point, Chinese digits
const NUM: &str = "[一二兩三四五六七八九十0-9.]+";

// A bare 千 threshold and a bare 百 amount are admitted for "滿千送百"
static THRESHOLD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("滿(千|{NUM})(?:元)?(?:現?折|省|送)(百|{NUM})")).unwrap()
});

static ADD_ONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?:加|多)({NUM})元?(?:加|多|送)({NUM})件")).unwrap());

static NTH_SAVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("第({NUM})件(?:省|折|現折)({NUM})元?")).unwrap());

static BOGO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("買({NUM})送({NUM})")).unwrap());

static NTH_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("第({NUM})件({NUM}|半)折?")).unwrap());

static GROUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("({NUM})件({NUM}|半)折")).unwrap());

static SIMPLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9.]+)折").unwrap());

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// 滿1000送100, 滿千送百, 滿500元現折50
pub fn threshold(input: &PromotionText) -> Option<PromotionResult> {
    let caps = THRESHOLD_PATTERN.captures(input.cleaned())?;
    let raw_threshold = group(&caps, 1)?;
    let raw_amount = group(&caps, 2)?;

    let threshold = if raw_threshold.contains('千') {
        1000.0
    } else {
        normalize(raw_threshold)
    };
    let amount = if raw_amount.contains('百') {
        100.0
    } else {
        normalize(raw_amount)
    };

    if threshold <= 0.0 {
        return None;
    }

    let final_price = threshold - amount;
    let rate = final_price / threshold * 10.0;

    Some(PromotionResult::new(
        PromotionType::Threshold,
        format!("滿{}折{}", plain(threshold), plain(amount)),
        discount_label(rate),
        format!("消費滿 ${} 省 ${}", plain(threshold), plain(amount)),
        rate,
    ))
}

/// 1件50 加一元多一件: pay a little more, get extra items
pub fn add_one(input: &PromotionText) -> Option<PromotionResult> {
    let caps = ADD_ONE_PATTERN.captures(input.cleaned())?;
    let base_price = input.base_price()?;

    let add_price = normalize(group(&caps, 1)?);
    let add_count = normalize(group(&caps, 2)?);

    let total_cost = base_price + add_price;
    let total_count = 1.0 + add_count;
    let original_value = base_price * total_count;
    if original_value <= 0.0 {
        return None;
    }

    let rate = total_cost / original_value * 10.0;

    Some(PromotionResult::new(
        PromotionType::AddOne,
        format!("加{}元多{}件", plain(add_price), plain(add_count)),
        discount_label(rate),
        format!(
            "原價${}，加${}多{}件。平均單件${}",
            plain(base_price),
            plain(add_price),
            plain(add_count),
            fixed(total_cost / total_count, 1)
        ),
        rate,
    ))
}

/// 第2件省50元: fixed saving on the second item only
pub fn nth_save(input: &PromotionText) -> Option<PromotionResult> {
    let caps = NTH_SAVE_PATTERN.captures(input.cleaned())?;
    let base_price = input.base_price()?;

    let nth = normalize(group(&caps, 1)?);
    let save_amount = normalize(group(&caps, 2)?);

    // Only the "second item" idiom; other ordinals fall through
    if nth != 2.0 || base_price <= 0.0 {
        return None;
    }

    let total_cost = base_price + (base_price - save_amount);
    let original_value = base_price * 2.0;
    let rate = total_cost / original_value * 10.0;

    Some(PromotionResult::new(
        PromotionType::NthSave,
        format!("第{}件省{}元", plain(nth), plain(save_amount)),
        discount_label(rate),
        format!(
            "原價${}，第2件折${}。平均單件${}",
            plain(base_price),
            plain(save_amount),
            plain(total_cost / 2.0)
        ),
        rate,
    ))
}

/// 買一送一, 買2送1
pub fn bogo(input: &PromotionText) -> Option<PromotionResult> {
    let caps = BOGO_PATTERN.captures(input.cleaned())?;
    let buy = normalize(group(&caps, 1)?);
    let get = normalize(group(&caps, 2)?);

    if buy <= 0.0 || get <= 0.0 {
        return None;
    }

    let total_items = buy + get;
    let rate = buy / total_items * 10.0;

    Some(PromotionResult::new(
        PromotionType::Bogo,
        format!("買{}送{}", plain(buy), plain(get)),
        discount_label(rate),
        format!(
            "買 {} 拿 {}，相當於 {} 折",
            plain(buy),
            plain(total_items),
            fixed(rate, 2)
        ),
        rate,
    ))
}

/// 第2件6折, 第二件半價: every item full price except the Nth
pub fn nth_item(input: &PromotionText) -> Option<PromotionResult> {
    let caps = NTH_ITEM_PATTERN.captures(input.cleaned())?;
    let nth = normalize(group(&caps, 1)?);
    let raw_discount = group(&caps, 2)?;

    let mut discount = normalize(raw_discount);
    let price_factor = if raw_discount == "半" || discount == 0.5 {
        discount = 5.0;
        0.5
    } else if discount < 10.0 {
        discount / 10.0
    } else {
        // Two-digit form: 75 means 75%
        discount / 100.0
    };

    if nth <= 1.0 {
        return None;
    }

    let total_cost = (nth - 1.0) + price_factor;
    let rate = total_cost / nth * 10.0;

    Some(PromotionResult::new(
        PromotionType::NthItem,
        format!("第{}件{}折", plain(nth), plain(discount)),
        discount_label(rate),
        format!("購買 {} 件平均，實際為 {} 折", plain(nth), fixed(rate, 2)),
        rate,
    ))
}

/// 買100元A送50元B: two differently priced items
pub fn buy_a_get_b(input: &PromotionText) -> Option<PromotionResult> {
    let cleaned = input.cleaned();
    if !(cleaned.contains('買') && cleaned.contains('送')) {
        return None;
    }

    let &[price_a, price_b, ..] = input.prices() else {
        return None;
    };

    let total_value = price_a + price_b;
    if total_value <= 0.0 {
        return None;
    }
    let rate = price_a / total_value * 10.0;

    Some(PromotionResult::new(
        PromotionType::BuyAGetB,
        "買A送B (不同價)",
        discount_label(rate),
        format!(
            "買${}送${}。總值${}，僅付${}",
            plain(price_a),
            plain(price_b),
            plain(total_value),
            plain(price_a)
        ),
        rate,
    ))
}

/// 2件8折, 任選3件半折: the same discount on a group of items
pub fn group_discount(input: &PromotionText) -> Option<PromotionResult> {
    // Ordinal phrasing belongs to NthSave/NthItem
    if input.cleaned().contains('第') {
        return None;
    }

    let caps = GROUP_PATTERN.captures(input.cleaned())?;
    let count = normalize(group(&caps, 1)?);
    let raw_discount = group(&caps, 2)?;

    let mut discount = normalize(raw_discount);
    if discount == 0.5 || raw_discount == "半" {
        discount = 5.0;
    }

    Some(PromotionResult::new(
        PromotionType::GroupDisc,
        format!("{}件{}折", plain(count), plain(discount)),
        format!("{} 折", plain(discount)),
        format!("全部商品皆享 {} 折優惠", plain(discount)),
        discount,
    ))
}

/// 7折, 85折
pub fn simple(input: &PromotionText) -> Option<PromotionResult> {
    let caps = SIMPLE_PATTERN.captures(input.cleaned())?;
    let value = parse_decimal_prefix(group(&caps, 1)?)?;

    // 70折 and 7折 mean the same thing
    let rate = if value < 10.0 { value } else { value / 10.0 };
    let saved_percent = round_half_up((10.0 - rate) * 10.0);

    Some(PromotionResult::new(
        PromotionType::Simple,
        "直接折扣",
        format!("{} 折", plain(rate)),
        format!("直接省下 {}%", plain(saved_percent)),
        rate,
    ))
}
