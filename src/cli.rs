// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, OutputFormat, Source};
use crate::csv;
use crate::listing::Listing;
use crate::progress::Progress;
use crate::runner;
use crate::specs;

enum Action {
    Scan,
    ListSites,
}

/// Status lines go to stderr so stdout stays clean for the data rows.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AppOptions::default();
    match parse_cli(&mut options)? {
        Action::ListSites => {
            list_sites();
            Ok(())
        }
        Action::Scan => scan(&options),
    }
}

fn parse_cli(options: &mut AppOptions) -> Result<Action, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                options.scan.source = Some(Source::File(PathBuf::from(v)));
            }
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                options.scan.source = Some(Source::Url(v));
            }
            "--site" => {
                let v = args.next().ok_or("Missing value for --site")?;
                if specs::by_name(&v).is_none() {
                    return Err(format!("Unknown site: {} (try --list-sites)", v).into());
                }
                options.scan.site = v;
            }
            "--list-sites" => return Ok(Action::ListSites),
            "--year" => {
                let v: i32 = args.next().ok_or("Missing value for --year")?.parse()?;
                if !(1900..=2100).contains(&v) {
                    return Err("Year out of range (1900-2100)".into());
                }
                options.scan.year = Some(v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.output.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => options.output.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Action::Scan)
}

fn list_sites() {
    for site in specs::all() {
        println!("{}\t{}", site.name, site.host);
    }
}

fn scan(options: &AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    let site = specs::by_name(&options.scan.site)
        .ok_or_else(|| format!("Unknown site: {}", options.scan.site))?;
    let source = options
        .scan
        .source
        .as_ref()
        .ok_or("No input given; pass --file <path> or --url <http://...>")?;
    let year = runner::evaluation_year(options.scan.year);

    let output = runner::run(source, site, year, &mut StderrProgress)?;

    let Some(chart) = output.chart else {
        eprintln!("No listings above the price floor.");
        return Ok(());
    };

    let headers = options.output.include_headers.then(header_row);
    let rows: Vec<Vec<String>> = chart.listings().iter().map(listing_row).collect();
    print!("{}", csv::rows_to_string(&rows, &headers, options.output.format.delim()));
    Ok(())
}

fn header_row() -> Vec<String> {
    vec![s!("Title"), s!("Price"), s!("Mileage"), s!("Year"), s!("Age"), s!("Color")]
}

fn listing_row(l: &Listing) -> Vec<String> {
    vec![
        s!(l.title().unwrap_or("")),
        l.price().to_string(),
        l.mileage().to_string(),
        l.year().to_string(),
        l.age().to_string(),
        l.color().css(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::PageDoc;
    use crate::{pipeline, specs};

    #[test]
    fn rows_carry_css_colors() {
        let page = r#"<html><body><article class="styled__Article-sc-1 x">
            <h2 class="Title__StyledTitle-sc-1">Opel Astra</h2>
            <p class="Price__StyledPrice-sc-1">30 000 kr</p>
            <ul>
              <li class="ParametersList__ListItem-sc-1">2015</li>
              <li class="ParametersList__ListItem-sc-1">Bensin</li>
              <li class="ParametersList__ListItem-sc-1">90 000</li>
            </ul></article></body></html>"#;
        let set = pipeline::run(&PageDoc::parse(s!(page)), specs::default_site(), 2024);

        let row = listing_row(&set.listings[0]);
        assert_eq!(
            row,
            vec![
                s!("Opel Astra"),
                s!("30000"),
                s!("90000"),
                s!("2015"),
                s!("9"),
                s!("hsl(234, 89.5%, 56.5%)"),
            ]
        );
        assert_eq!(header_row().len(), row.len());
    }
}
