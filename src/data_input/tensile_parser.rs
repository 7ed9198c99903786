// src/data_input/tensile_parser.rs

use csv::ReaderBuilder;
use log::{debug, info, warn};
use ndarray::Array1;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::constants::{
    DATA_COLUMN_COUNT, DATA_SECTION_MARKER, LABEL_GAGE_DIAMETER, LABEL_MAXIMUM_FORCE,
    LABEL_MAXIMUM_STRAIN, METADATA_VALUE_FIELD,
};
use crate::data_input::tensile_data::{SampleMetadata, TestSample};
use crate::error::{Result, TensileError};

const DATA_COLUMN_NAMES: [&str; DATA_COLUMN_COUNT] = ["time", "displacement", "force", "strain"];

/// Parses a tensile test export into a `TestSample`.
///
/// The file starts with metadata rows of the form `<Label>,<units>,<value>`.
/// A row whose first field is `(s)` is the units row of the data table; every
/// non-blank row after it is a four-column numeric row
/// (time, displacement, force, strain).
pub fn parse_tensile_file(input_file_path: &Path) -> Result<TestSample> {
    let file = match File::open(input_file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TensileError::FileNotFound(input_file_path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    info!("Reading tensile data from '{}'", input_file_path.display());
    // The file is owned by the reader and closed when parsing returns, on success or error.
    parse_tensile_reader(BufReader::new(file))
}

/// Same as [`parse_tensile_file`] for any byte source.
pub fn parse_tensile_reader<R: Read>(reader: R) -> Result<TestSample> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut gage_diameter: Option<f64> = None;
    let mut maximum_force: Option<f64> = None;
    let mut maximum_strain: Option<f64> = None;

    let mut begin_reading = false;
    let mut columns: [Vec<f64>; DATA_COLUMN_COUNT] = Default::default();

    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<String> = record.iter().map(clean_field).collect();

        // Skip empty lines
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        if begin_reading {
            if fields.len() != DATA_COLUMN_COUNT {
                return Err(TensileError::parse(
                    line,
                    format!(
                        "expected {} data columns, found {}",
                        DATA_COLUMN_COUNT,
                        fields.len()
                    ),
                ));
            }
            for (column, (field, name)) in columns
                .iter_mut()
                .zip(fields.iter().zip(DATA_COLUMN_NAMES.iter()))
            {
                column.push(parse_number(field, line, name)?);
            }
            continue;
        }

        match fields[0].as_str() {
            LABEL_GAGE_DIAMETER => gage_diameter = Some(parse_metadata_value(&fields, line)?),
            LABEL_MAXIMUM_FORCE => maximum_force = Some(parse_metadata_value(&fields, line)?),
            LABEL_MAXIMUM_STRAIN => maximum_strain = Some(parse_metadata_value(&fields, line)?),
            DATA_SECTION_MARKER => {
                debug!("Found data section marker at line {}", line);
                begin_reading = true;
            }
            _ => {}
        }
    }

    let end_line = rdr.position().line();
    if !begin_reading {
        return Err(TensileError::parse(
            end_line,
            format!("data section marker '{}' not found", DATA_SECTION_MARKER),
        ));
    }
    let gage_diameter_mm = gage_diameter.ok_or_else(|| {
        TensileError::parse(
            end_line,
            format!("missing '{}' metadata", LABEL_GAGE_DIAMETER),
        )
    })?;
    if maximum_force.is_none() {
        warn!("No '{}' metadata found", LABEL_MAXIMUM_FORCE);
    }
    if maximum_strain.is_none() {
        warn!("No '{}' metadata found", LABEL_MAXIMUM_STRAIN);
    }

    let [time, displacement, force, strain] = columns;
    info!("Finished reading {} data rows.", time.len());
    debug!("Gage diameter: {} mm", gage_diameter_mm);

    TestSample::new(
        SampleMetadata {
            gage_diameter_mm,
            maximum_force_kn: maximum_force,
            maximum_strain,
        },
        Array1::from(time),
        Array1::from(displacement),
        Array1::from(force),
        Array1::from(strain),
    )
}

/// Removes every double quote and surrounding whitespace.
fn clean_field(field: &str) -> String {
    field.replace('"', "").trim().to_string()
}

fn parse_metadata_value(fields: &[String], line: u64) -> Result<f64> {
    let label = &fields[0];
    let value = fields.get(METADATA_VALUE_FIELD).ok_or_else(|| {
        TensileError::parse(line, format!("'{}' row has no value field", label))
    })?;
    parse_number(value, line, label)
}

fn parse_number(value: &str, line: u64, name: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| {
        TensileError::parse(line, format!("invalid {} value '{}'", name, value))
    })
}

fn csv_error(e: csv::Error) -> TensileError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io_err) => TensileError::Io(io_err),
        _ => TensileError::parse(line, message),
    }
}


// src/data_input/tensile_parser.rs
