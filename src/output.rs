//! Output Module
//!
//! テーブルをCSV形式でシリアライズするモジュール。
//! クォートとエスケープはcsvクレートに委譲します。

use std::path::Path;

use crate::error::XlsxToCsvError;
use crate::table::Table;

/// テーブルをCSVファイルとして書き出す
///
/// 列名のヘッダー行に続けて各データ行を出力します。行インデックス列は
/// 出力されません。空セルは空フィールドとしてシリアライズされます。
/// 出力はUTF-8、カンマ区切り、`\n`改行です。
///
/// # 引数
///
/// * `table` - 書き出すテーブル
/// * `path` - 出力ファイルのパス
///
/// # 戻り値
///
/// * `Ok(())` - 書き出しに成功した場合
/// * `Err(XlsxToCsvError::Csv)` - レコードの書き込みに失敗した場合
/// * `Err(XlsxToCsvError::Io)` - フラッシュに失敗した場合
pub fn write_csv(table: &Table, path: &Path) -> Result<(), XlsxToCsvError> {
    let mut writer = csv::Writer::from_path(path)?;

    if table.column_count() > 0 {
        writer.write_record(table.columns().iter().map(|c| c.name()))?;

        for row_idx in 0..table.row_count() {
            writer.write_record(table.columns().iter().map(|c| {
                c.values()
                    .get(row_idx)
                    .map(|v| v.to_field())
                    .unwrap_or_default()
            }))?;
        }
    }

    writer.flush()?;
    Ok(())
}
