//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use chrono::NaiveDateTime;

/// セルの値を表す列挙型
///
/// 読み込み時に型が確定するタグ付きバリアントです。列の文字列型判定
/// （`Column::is_string_typed`）は`Text`バリアントのみを文字列として扱います。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 論理値
    Bool(bool),

    /// 日付・時刻
    Date(NaiveDateTime),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 値が文字列かどうかを判定
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// 値をCSVフィールド用の文字列として取得
    ///
    /// 空セルは空文字列にシリアライズされます。日付は時刻成分が
    /// 00:00:00の場合はISO 8601の日付（YYYY-MM-DD）、それ以外は
    /// 日付と時刻（YYYY-MM-DD HH:MM:SS）として出力されます。
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => {
                if d.time() == chrono::NaiveTime::MIN {
                    d.format("%Y-%m-%d").to_string()
                } else {
                    d.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            CellValue::Error(e) => e.clone(),
            CellValue::Empty => String::new(),
        }
    }
}
