//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。
//! `Converter`は単一ファイル変換とディレクトリ一括変換のファサードです。

use std::fs;
use std::path::Path;

use crate::detect::EmailDetector;
use crate::error::XlsxToCsvError;
use crate::output::write_csv;
use crate::parser::load_table;

/// サポートする入力ファイルの拡張子
///
/// 大文字小文字を区別せずに判定されます。
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// パスがサポート対象の拡張子を持つかを判定する
pub fn is_supported_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// メール列のみを出力するか
    pub email_only: bool,

    /// 進捗を標準出力に表示するか
    pub verbose: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            email_only: true,
            verbose: false,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # デフォルト設定
///
/// - メール列のみを出力: 有効
/// - 進捗表示: 無効
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxmail::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsxmail::XlsxToCsvError> {
/// let converter = ConverterBuilder::new()
///     .email_only(false)
///     .verbose(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// メール列のみを出力するかを指定する
    ///
    /// # 引数
    ///
    /// * `email_only: bool`:
    ///   * `true`: 検出した最初のメール列のみを出力（デフォルト）
    ///   * `false`: すべての列を出力
    pub fn email_only(mut self, email_only: bool) -> Self {
        self.config.email_only = email_only;
        self
    }

    /// 進捗を標準出力に表示するかを指定する
    ///
    /// # 引数
    ///
    /// * `verbose: bool`:
    ///   * `true`: 進捗行を表示
    ///   * `false`: 表示しない（デフォルト）
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// メール検出用の正規表現はここでコンパイルされます。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)` - 構築に成功した場合
    /// * `Err(XlsxToCsvError::Config)` - パターンのコンパイルに失敗した場合
    pub fn build(self) -> Result<Converter, XlsxToCsvError> {
        let detector = EmailDetector::new()?;
        Ok(Converter::new(self.config, detector))
    }
}

/// 変換処理のファサード
///
/// ExcelファイルをCSV形式に変換するためのメインエントリーポイントです。
/// `ConverterBuilder`を使用して構築された設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use std::path::Path;
/// use xlsxmail::ConverterBuilder;
///
/// # fn main() -> Result<(), xlsxmail::XlsxToCsvError> {
/// let converter = ConverterBuilder::new().build()?;
/// let ok = converter.convert_file(Path::new("input.xlsx"), Path::new("output.csv"));
/// assert!(ok);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// メール列検出器
    detector: EmailDetector,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig, detector: EmailDetector) -> Self {
        Self { config, detector }
    }

    /// 1つのExcelファイルをCSVファイルに変換する
    ///
    /// # 処理フロー
    ///
    /// 1. スプレッドシートをテーブルに読み込む
    /// 2. メール列のみモードの場合、検出器を実行する
    ///    - 列が見つかればその1列だけの射影に置き換える
    ///    - 見つからなければ全列を保持する（意図的なフォールバック）
    /// 3. テーブルをCSVとして書き出す
    ///
    /// # 戻り値
    ///
    /// * `true` - 変換に成功した場合
    /// * `false` - 失敗した場合
    ///
    /// 読み込み・書き出し中のエラーはこの関数の内部で捕捉され、
    /// 入力パスと原因を含むエラー行が標準エラー出力に書き込まれます。
    /// エラーが呼び出し元に伝播することはありません。
    pub fn convert_file(&self, input: &Path, output: &Path) -> bool {
        match self.try_convert(input, output) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error converting {}: {}", input.display(), e);
                false
            }
        }
    }

    fn try_convert(&self, input: &Path, output: &Path) -> Result<(), XlsxToCsvError> {
        if self.config.verbose {
            let file_name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.display().to_string());
            println!("Reading {}...", file_name);
        }

        let mut table = load_table(input)?;

        if self.config.email_only {
            match self.detector.detect(&table).map(str::to_owned) {
                Some(column_name) => {
                    if self.config.verbose {
                        println!("Found email column: {}", column_name);
                    }
                    table = table.project(&column_name);
                }
                None => {
                    if self.config.verbose {
                        println!("No email column found - exporting all columns");
                    }
                }
            }
        }

        write_csv(&table, output)
    }

    /// ディレクトリ内のすべてのExcelファイルを変換する
    ///
    /// 入力ディレクトリが存在しない場合はエラーを報告して0を返します。
    /// 出力ディレクトリは（親ディレクトリを含めて）必要に応じて作成されます。
    /// サポート対象外のファイルとサブディレクトリは無視されます
    /// （再帰しません）。エントリの列挙順はプラットフォーム依存です。
    ///
    /// 1ファイルの失敗が残りのファイルの処理を中断することはありません。
    ///
    /// # 戻り値
    ///
    /// 変換に成功したファイル数
    pub fn convert_directory(&self, input_dir: &Path, output_dir: &Path) -> usize {
        if !input_dir.exists() {
            eprintln!("Error: Input directory not found: {}", input_dir.display());
            return 0;
        }

        if let Err(e) = fs::create_dir_all(output_dir) {
            eprintln!(
                "Error: Failed to create output directory {}: {}",
                output_dir.display(),
                e
            );
            return 0;
        }

        let entries = match fs::read_dir(input_dir) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "Error: Failed to read input directory {}: {}",
                    input_dir.display(),
                    e
                );
                return 0;
            }
        };

        let mut success_count = 0;

        for entry in entries.flatten() {
            let input_path = entry.path();
            if !input_path.is_file() || !is_supported_path(&input_path) {
                continue;
            }

            let stem = match input_path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            let output_name = format!("{}.csv", stem);
            let output_path = output_dir.join(&output_name);

            if self.convert_file(&input_path, &output_path) {
                success_count += 1;
                if self.config.verbose {
                    println!("Successfully converted to {}", output_name);
                }
            }
        }

        success_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert!(builder.config.email_only);
        assert!(!builder.config.verbose);
    }

    #[test]
    fn test_email_only() {
        let builder = ConverterBuilder::new().email_only(false);
        assert!(!builder.config.email_only);
    }

    #[test]
    fn test_verbose() {
        let builder = ConverterBuilder::new().verbose(true);
        assert!(builder.config.verbose);
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ConverterBuilder::new().email_only(false).verbose(true);
        assert!(!builder.config.email_only);
        assert!(builder.config.verbose);
    }

    #[test]
    fn test_build_success() {
        let result = ConverterBuilder::new().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_is_supported_path() {
        assert!(is_supported_path(&PathBuf::from("report.xlsx")));
        assert!(is_supported_path(&PathBuf::from("report.xls")));

        // 大文字小文字を区別しない
        assert!(is_supported_path(&PathBuf::from("REPORT.XLSX")));
        assert!(is_supported_path(&PathBuf::from("report.Xls")));

        assert!(!is_supported_path(&PathBuf::from("report.csv")));
        assert!(!is_supported_path(&PathBuf::from("report.txt")));
        assert!(!is_supported_path(&PathBuf::from("report")));
    }

    #[test]
    fn test_convert_file_missing_input_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let converter = ConverterBuilder::new().build().unwrap();

        let ok = converter.convert_file(
            &dir.path().join("nonexistent.xlsx"),
            &dir.path().join("out.csv"),
        );
        assert!(!ok);
    }

    #[test]
    fn test_convert_directory_missing_input_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let converter = ConverterBuilder::new().build().unwrap();

        let count = converter.convert_directory(
            &dir.path().join("nonexistent"),
            &dir.path().join("out"),
        );
        assert_eq!(count, 0);
    }
}
