//! Email Column Detector Module
//!
//! テーブルの列をスキャンして、メールアドレスを含む最初の文字列型の列を
//! 検出するモジュール。

use regex::Regex;

use crate::error::XlsxToCsvError;
use crate::table::Table;
use crate::types::CellValue;

/// メールアドレス検出に使用する正規表現パターン
///
/// 単語境界付きの`local@domain.tld`形状に部分一致するかを判定します。
/// 末尾の文字クラス`[A-Z|a-z]`は互換性のため元のパターンを忠実に
/// 保持しており、リテラルの`|`も一致します。
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

/// メール列検出器
///
/// コンパイル済みの正規表現を保持し、テーブルの列を定義順にスキャンします。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmail::{EmailDetector, Table};
///
/// # fn main() -> Result<(), xlsxmail::XlsxToCsvError> {
/// let detector = EmailDetector::new()?;
/// let table = Table::new(Vec::new());
/// assert_eq!(detector.detect(&table), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EmailDetector {
    /// コンパイル済みパターン
    pattern: Regex,
}

impl EmailDetector {
    /// 検出器を生成（パターンをコンパイル）
    ///
    /// # 戻り値
    ///
    /// * `Ok(EmailDetector)` - パターンのコンパイルに成功した場合
    /// * `Err(XlsxToCsvError::Config)` - コンパイルに失敗した場合
    pub fn new() -> Result<Self, XlsxToCsvError> {
        let pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| XlsxToCsvError::Config(format!("Invalid email pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// メールアドレスを含む最初の列の名前を返す
    ///
    /// 列を定義順に走査し、文字列型でない列はスキップします。
    /// 文字列型の列について、空でない値のいずれかがパターンに
    /// 部分一致すれば、その列の名前を返します。
    ///
    /// 該当する列が存在しない場合は`None`を返します。これは正常な
    /// 結果であり、エラーではありません。副作用はありません。
    pub fn detect<'a>(&self, table: &'a Table) -> Option<&'a str> {
        for column in table.columns() {
            if !column.is_string_typed() {
                continue;
            }

            let has_match = column.values().iter().any(|value| match value {
                CellValue::Text(s) => self.pattern.is_match(s),
                _ => false,
            });

            if has_match {
                return Some(column.name());
            }
        }

        None
    }
}
