use std::io::Write;

use crate::types::{GeneInterval, GpredError};

/// Write gene positions as a `Start,Stop` CSV table
pub fn write_positions_format<W: Write>(
    writer: &mut W,
    genes: &[GeneInterval],
) -> Result<(), GpredError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Start", "Stop"])?;
    for gene in genes {
        csv_writer.write_record([gene.start.to_string(), gene.end.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_positions_format_multiple_genes() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let genes = vec![GeneInterval::new(17, 28), GeneInterval::new(45, 56)];
        write_positions_format(&mut cursor, &genes).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "Start,Stop\n17,28\n45,56\n");
    }

    #[test]
    fn test_write_positions_format_no_genes() {
        let mut buffer = Vec::new();
        write_positions_format(&mut buffer, &[]).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "Start,Stop\n");
    }
}
