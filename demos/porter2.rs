use std::fs::File;
use std::io::{stdin, BufRead};

use clap::Parser;
use porter2::porter2_stemmer;

#[derive(Parser, Debug)]
struct Args {
    /// Path to target CSV file, whose first column will be stemmed
    #[arg(long)]
    path: Option<String>,

    /// Words to stem. Read from stdin, one per line, if none are given
    word: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.path {
        let file = File::open(path)?;
        let mut reader = simd_csv::Reader::from_reader(file);
        let mut writer = simd_csv::Writer::from_writer(std::io::stdout());

        let mut record = reader.byte_headers()?.clone();
        record.push_field(b"stem");

        writer.write_byte_record(&record)?;

        while reader.read_byte_record(&mut record)? {
            let stem = porter2_stemmer(std::str::from_utf8(&record[0])?);
            record.push_field(stem.as_bytes());

            writer.write_byte_record(&record)?;
        }

        writer.flush()?;
    } else if args.word.is_empty() {
        for line in stdin().lock().lines() {
            let line = line?;
            println!("{} => {}", &line, porter2_stemmer(&line));
        }
    } else {
        for word in args.word {
            println!("{} => {}", &word, porter2_stemmer(&word));
        }
    }

    Ok(())
}
