//! Parser Module
//!
//! calamineを使用したスプレッドシート読み込みの実装。
//! 最初のワークシートを一括で読み込み、列指向の`Table`を構築します。
//! `.xlsx`と`.xls`の両方をサポートし、拡張子は大文字小文字を
//! 区別せずに判定します。

use calamine::{open_workbook, Data, Range, Reader, Sheets, Xls, Xlsx};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::XlsxToCsvError;
use crate::table::{Column, Table};
use crate::types::CellValue;

/// スプレッドシートファイルを読み込み、テーブルを構築する
///
/// 最初のワークシートの先頭行をヘッダー行として列名に使用し、
/// 残りの行をセル値として列ごとに格納します。
///
/// # 引数
///
/// * `path` - 入力ファイルのパス（`.xlsx`または`.xls`）
///
/// # 戻り値
///
/// * `Ok(Table)` - 読み込みに成功した場合
/// * `Err(XlsxToCsvError::Parse)` - ファイルが開けない、または破損している場合
/// * `Err(XlsxToCsvError::Config)` - ワークシートが存在しない場合
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table, XlsxToCsvError> {
    let mut workbook = open_sheets(path.as_ref())?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| XlsxToCsvError::Config("Workbook contains no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(XlsxToCsvError::Parse)?;

    Ok(build_table(&range))
}

/// 拡張子に応じたリーダーでワークブックを開く
///
/// 拡張子の判定は大文字小文字を区別しません。`.xls`以外は
/// XLSX形式として開きます。
fn open_sheets(path: &Path) -> Result<Sheets<BufReader<File>>, XlsxToCsvError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let workbook = match ext.as_deref() {
        Some("xls") => {
            Sheets::Xls(open_workbook::<Xls<_>, _>(path).map_err(calamine::Error::from)?)
        }
        _ => Sheets::Xlsx(open_workbook::<Xlsx<_>, _>(path).map_err(calamine::Error::from)?),
    };

    Ok(workbook)
}

/// セル範囲から列指向のテーブルを構築する
///
/// 先頭行がヘッダー行になります。範囲が空の場合は列を持たない
/// テーブルを返します。
fn build_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let header_row = match rows.next() {
        Some(row) => row,
        None => return Table::new(Vec::new()),
    };

    let mut columns: Vec<Column> = header_names(header_row)
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for row in rows {
        for (col_idx, column) in columns.iter_mut().enumerate() {
            let value = row
                .get(col_idx)
                .map(cell_value)
                .unwrap_or(CellValue::Empty);
            column.push(value);
        }
    }

    Table::new(columns)
}

/// ヘッダー行から一意な列名のリストを生成する
///
/// 空のヘッダーセルには位置ベースの名前（`Column1`, `Column2`, ...）を
/// 割り当てます。重複する名前には`.1`, `.2`のような接尾辞を付けて
/// 一意性を保ちます。
fn header_names(header_row: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header_row.len());

    for (col_idx, cell) in header_row.iter().enumerate() {
        let raw = cell_value(cell).to_field();
        let base = if raw.is_empty() {
            format!("Column{}", col_idx + 1)
        } else {
            raw
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(name);
    }

    names
}

/// calamineのセルデータを`CellValue`に変換する
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match serial_to_datetime(dt.as_f64()) {
            Some(datetime) => CellValue::Date(datetime),
            // シリアル値が日付として解釈できない場合は数値として保持
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
    }
}

/// Excelのシリアル値を`NaiveDateTime`に変換する
///
/// 1900年システム（1899年12月30日起算）を使用します。
/// Excelは1900年をうるう年として扱うバグがあり、存在しない
/// 1900年2月29日（シリアル値60）が挿入されています。そのため
/// シリアル値60未満に対してのみ+1日を加算し、それ以降は起算日に
/// シリアル値をそのまま加算します（シリアル値61 = 1900年3月1日）。
/// 小数部は1日の秒数（86400秒）に対する割合として時刻に変換されます。
fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;

    let days = serial.floor() as i64;
    let days_offset = if serial < 60.0 { 1 } else { 0 };
    let mut date = epoch.checked_add_signed(Duration::days(days + days_offset))?;

    let frac = serial - serial.floor();
    let mut seconds = (frac * 86_400.0).round() as u32;
    if seconds >= 86_400 {
        // 丸めにより1日分に達した場合は繰り上げる
        date = date.succ_opt()?;
        seconds = 0;
    }

    let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.and_time(time))
}
