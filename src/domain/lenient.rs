// ==========================================
// 推拉门配置系统 - 宽松数值/文本解析
// ==========================================
// 职责: 配置输入在边界处统一 floor + clamp
// 规则: 非数值 → 0, 负数 → 0, 小数 → 向下取整
// ==========================================

use serde::de::{self, DeserializeOwned, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// 统一的 floor-and-clamp 辅助函数
///
/// - NaN / ±∞ → 0
/// - 负数 → 0
/// - 其他 → floor 后截断到 u32 范围
pub fn floor_clamp(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}

/// 负值截断为 0（切割长度专用，保留小数）
pub fn clip0(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 文本转数值（与表单输入一致：去空格、允许逗号小数点）
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.replace(',', ".").parse::<f64>().ok()
}

// ==========================================
// 通用访问器: 任意标量 → f64
// ==========================================
struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        Ok(if v { 1.0 } else { 0.0 })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        Ok(parse_number(v).unwrap_or(0.0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<f64, D::Error> {
        d.deserialize_any(NumberVisitor)
    }

    // 数组 / 对象: 读完丢弃 → 0
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }
}

/// serde: 毫米值（u32, floor + clamp ≥0）
pub fn mm<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor).map(floor_clamp)
}

/// serde: 横档中心高度列表（非数值元素视为 0，非数组 → 空列表）
pub fn centers<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CentersVisitor;

    impl<'de> Visitor<'de> for CentersVisitor {
        type Value = Vec<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of heights")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<f64>, A::Error> {
            #[derive(Deserialize)]
            struct Center(#[serde(deserialize_with = "raw_number")] f64);

            let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Center(v)) = seq.next_element()? {
                out.push(if v.is_finite() { v } else { 0.0 });
            }
            Ok(out)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Vec<f64>, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Vec<f64>, D::Error> {
            d.deserialize_any(CentersVisitor)
        }

        fn visit_none<E: de::Error>(self) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Vec<f64>, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(CentersVisitor)
}

fn raw_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

// ==========================================
// LenientText - 任意标量 → 文本
// ==========================================
// 用于枚举字段: "82" 与 82 等价
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientText(pub String);

impl<'de> Deserialize<'de> for LenientText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = LenientText;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, a number or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LenientText, E> {
                Ok(LenientText(v.trim().to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LenientText, E> {
                Ok(LenientText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LenientText, E> {
                Ok(LenientText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LenientText, E> {
                Ok(LenientText(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<LenientText, E> {
                Ok(LenientText(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<LenientText, E> {
                Ok(LenientText::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<LenientText, E> {
                Ok(LenientText::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<LenientText, D::Error> {
                d.deserialize_any(TextVisitor)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LenientText, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientText::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LenientText, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LenientText::default())
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

/// serde: 任意标量 → String
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    LenientText::deserialize(deserializer).map(|t| t.0)
}

/// serde: 嵌套结构体; null 或形状不符 → 默认值
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// serde: 布尔值，缺省为 true; 非布尔 → true
pub fn flag_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}
