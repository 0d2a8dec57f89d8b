//! スキルバーの値

pub const DEFAULT_SKILL_COLOR: &str = "#388bff";

/// `.skill` 要素の data-skill / data-color から作るバー表示値
#[derive(Debug, Clone, PartialEq)]
pub struct SkillLevel {
    /// 0..=100。小数は書かれたまま保持する
    pub percent: f64,
    pub color: String,
}

impl SkillLevel {
    /// 数値にできない値は0、範囲外は 0..=100 に収める
    pub fn from_attributes(value: Option<&str>, color: Option<&str>) -> Self {
        let percent = value
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            // "-0" は 0 として表示する
            .map(|v| v.clamp(0.0, 100.0) + 0.0)
            .unwrap_or(0.0);

        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_SKILL_COLOR)
            .to_string();

        Self { percent, color }
    }

    /// `.skill-fill` の width（"85%", "72.6%"）
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// `.skill-percent` のテキスト
    pub fn label(&self) -> String {
        self.width()
    }
}
