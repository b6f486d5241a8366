//! パフォーマンスベンチマーク
//!
//! rust_xlsxwriterで生成したワークブックをメモリ上で変換し、
//! 行数ごとの処理時間を測定します。

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::io::Cursor;
use xlsx2json::ConverterBuilder;

/// 列数
const COLS: u16 = 10;

/// `rows`行 × `COLS`列のワークブックを生成（文字列と数値を交互に配置）
fn generate_workbook(rows: u32) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for col in 0..COLS {
        worksheet.write_string(0, col, &format!("column_{}", col))?;
    }

    for row in 1..=rows {
        for col in 0..COLS {
            if col % 2 == 0 {
                worksheet.write_string(row, col, &format!("r{}c{}", row, col))?;
            } else {
                worksheet.write_number(row, col, row as f64 * 0.5)?;
            }
        }
    }

    workbook.save_to_buffer()
}

fn benchmark_convert_reader(c: &mut Criterion) {
    let converter = ConverterBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("convert_reader");
    group.sample_size(10);

    for rows in [1_000u32, 10_000, 50_000] {
        let data = generate_workbook(rows).unwrap();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                let input = Cursor::new(black_box(data.clone()));
                let mut output = Vec::new();
                converter
                    .convert_reader(black_box(input), black_box(&mut output))
                    .unwrap();
                black_box(output)
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(20))
        .warm_up_time(std::time::Duration::from_secs(3));
    targets = benchmark_convert_reader
}

criterion_main!(benches);
