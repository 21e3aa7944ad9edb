//! Table Module
//!
//! 読み込んだスプレッドシートを表す列指向のデータモデルを定義するモジュール。
//! テーブルは1つの入力ファイルから一括構築され、列の射影を除いて不変です。

use crate::types::CellValue;

/// 名前付きの列
///
/// 列名（テーブル内で一意）と、その列のセル値の順序付きリストを保持します。
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// 列名
    name: String,

    /// セル値（行順）
    values: Vec<CellValue>,
}

impl Column {
    /// 新しい列を生成
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// 列名を取得
    pub fn name(&self) -> &str {
        &self.name
    }

    /// セル値を取得
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// セル値を末尾に追加（読み込み時のみ使用）
    pub(crate) fn push(&mut self, value: CellValue) {
        self.values.push(value);
    }

    /// 列が文字列型かどうかを判定
    ///
    /// 空でないすべての値が文字列の場合にtrueを返します。
    /// すべて空の列は空虚に文字列型と判定されますが、
    /// マッチ対象の値が存在しないため検出には影響しません。
    pub fn is_string_typed(&self) -> bool {
        self.values
            .iter()
            .filter(|v| !v.is_empty())
            .all(CellValue::is_text)
    }
}

/// 順序付きの名前付き列の集合
///
/// 1つの入力ファイルから一括で構築され、検出・射影に消費された後、
/// CSVとしてシリアライズされて破棄されます。テーブルがファイル変換を
/// またいで生存することはありません。
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// 列（定義順）
    columns: Vec<Column>,
}

impl Table {
    /// 新しいテーブルを生成
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// 列を定義順で取得
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 列数を取得
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 行数を取得（ヘッダー行を除く）
    pub fn row_count(&self) -> usize {
        self.columns
            .first()
            .map(|c| c.values().len())
            .unwrap_or(0)
    }

    /// 指定した名前の列だけを残した射影テーブルを生成
    ///
    /// 列名と行順は保持されます。該当する列が存在しない場合は
    /// 空のテーブルを返します。
    pub fn project(&self, name: &str) -> Table {
        Table::new(
            self.columns
                .iter()
                .filter(|c| c.name() == name)
                .cloned()
                .collect(),
        )
    }
}
