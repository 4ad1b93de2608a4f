//! Export records as a [KML 2.2](http://www.opengis.net/kml/2.2) document.

use std::io::Write;

use crate::error::Result;
use crate::record::CrimeRecord;

const KML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
                          <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
                          <Document>\n";
const KML_FOOTER: &str = "</Document>\n</kml>";

/// A record that can be rendered as a KML `<Placemark>`.
pub trait Placemark {
    /// Text for the `<name>` element.
    fn name(&self) -> &str;

    /// Text for the `<description>` element.
    fn description(&self) -> &str;

    /// Longitude, written verbatim into `<coordinates>`.
    fn longitude(&self) -> &str;

    /// Latitude, written verbatim into `<coordinates>`.
    fn latitude(&self) -> &str;
}

impl Placemark for CrimeRecord {
    fn name(&self) -> &str {
        self.offense()
    }

    fn description(&self) -> &str {
        self.street()
    }

    fn longitude(&self) -> &str {
        CrimeRecord::longitude(self)
    }

    fn latitude(&self) -> &str {
        CrimeRecord::latitude(self)
    }
}

/// Write a KML document with one placemark per record, in iteration order.
pub fn write_kml<'a, W, P, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    P: Placemark + 'a,
    I: IntoIterator<Item = &'a P>,
{
    writer.write_all(KML_HEADER.as_bytes())?;
    for record in records {
        writer.write_all(placemark(record).as_bytes())?;
    }
    writer.write_all(KML_FOOTER.as_bytes())?;
    Ok(())
}

/// Render a KML document to a string.
pub fn to_kml<'a, P, I>(records: I) -> String
where
    P: Placemark + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut kml = String::from(KML_HEADER);
    for record in records {
        kml.push_str(&placemark(record));
    }
    kml.push_str(KML_FOOTER);
    kml
}

fn placemark<P: Placemark>(record: &P) -> String {
    format!(
        "<Placemark>\n\
         <name>{}</name>\n\
         <description>{}</description>\n\
         <Point>\n\
         <coordinates>{},{},0</coordinates>\n\
         </Point>\n\
         </Placemark>\n",
        escape(record.name()),
        escape(record.description()),
        record.longitude(),
        record.latitude()
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
