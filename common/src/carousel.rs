//! モーダル内の画像スライドショー

/// 画像カルーセル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

/// カルーセルの表示用データ
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub src: String,
    pub index: usize,
    pub count: usize,
    /// "2 / 3" 形式
    pub counter: String,
    /// 画像が1枚以下なら前後ボタンと位置表示を隠す
    pub show_controls: bool,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// 現在の画像（画像がなければ空文字）
    pub fn current(&self) -> &str {
        self.images.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// 指定位置へ移動。範囲外は両方向に折り返す
    pub fn show(&mut self, requested: i64) -> usize {
        let count = self.images.len() as i64;
        self.index = if count == 0 {
            0
        } else {
            requested.rem_euclid(count) as usize
        };
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.show(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.show(self.index as i64 - 1)
    }

    pub fn view(&self) -> CarouselView {
        let count = self.images.len();
        CarouselView {
            src: self.current().to_string(),
            index: self.index,
            count,
            counter: if count == 0 {
                String::new()
            } else {
                format!("{} / {}", self.index + 1, count)
            },
            show_controls: self.has_navigation(),
        }
    }
}
