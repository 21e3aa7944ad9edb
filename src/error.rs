//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// xlsxmailクレート全体で使用するエラー型
///
/// このエラー型は、Excelファイルの読み込み、解析、CSV出力処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: Excelファイルの解析中に発生したエラー（calamine由来）
/// - `Csv`: CSV出力中に発生したエラー（csvクレート由来）
/// - `Config`: 設定の検証に失敗したエラー（無効な正規表現など）
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmail::XlsxToCsvError;
/// use std::fs::File;
///
/// fn read_excel_file(path: &str) -> Result<(), XlsxToCsvError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToCsvError {
    /// I/O操作中に発生したエラー
    ///
    /// ファイルの読み込み失敗、書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// calamineクレートがExcelファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// CSV出力中に発生したエラー
    ///
    /// csvクレートがレコードを書き込む際に発生したエラーです。
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。ワークブックにワークシートが存在しない場合にも
    /// 使用されます。
    #[error("Configuration error: {0}")]
    Config(String),
}
