//! ヒーローセクションのタイピングアニメーション
//!
//! タイマー駆動部分（WASM側）から切り離した純粋な状態機械。
//! `tick()` ごとに表示文字列と次回までの待ち時間を返す。

use crate::config::TypingConfig;

/// 1ステップの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    config: TypingConfig,
    char_index: i64,
    deleting: bool,
}

impl Typewriter {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            chars: config.text.chars().collect(),
            config,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypingStep {
        let text = self.prefix(self.char_index);
        if self.deleting {
            self.char_index -= 1;
        } else {
            self.char_index += 1;
        }

        let len = self.chars.len() as i64;
        let delay_ms = if !self.deleting && self.char_index > len {
            self.deleting = true;
            self.config.pause_ms
        } else if self.deleting && self.char_index < 0 {
            self.deleting = false;
            self.char_index = 0;
            self.config.restart_ms
        } else if self.deleting {
            self.config.deleting_ms
        } else {
            self.config.typing_ms
        };

        TypingStep { text, delay_ms }
    }

    /// 先頭n文字（範囲外は丸める）
    fn prefix(&self, n: i64) -> String {
        let n = n.clamp(0, self.chars.len() as i64) as usize;
        self.chars[..n].iter().collect()
    }
}
