//! cppncss-compatible XML output (`-X`).
//!
//! The schema is fixed by downstream tooling (Jenkins' cppncss plugin,
//! historically) so the shape — including the `lable` typo on
//! `<average>`/`<sum>` — is reproduced exactly rather than "fixed".

use super::summary::filename_string;
use crate::core::FileInformation;
use std::io::{self, Write};

const STYLESHEET_PI: &str =
    "<?xml-stylesheet type=\"text/xsl\" href=\"https://raw.github.com/terma/cppncss-xsl/master/cppncss.xsl\"?>";

pub fn write_xml(out: &mut dyn Write, files: &[FileInformation]) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "{STYLESHEET_PI}")?;
    writeln!(out, "<cppncss>")?;
    write_function_measure(out, files)?;
    write_file_measure(out, files)?;
    writeln!(out, "</cppncss>")?;
    Ok(())
}

fn write_function_measure(out: &mut dyn Write, files: &[FileInformation]) -> io::Result<()> {
    writeln!(out, "  <measure type=\"Function\">")?;
    writeln!(out, "    <labels>")?;
    writeln!(out, "      <label>Nr.</label>")?;
    writeln!(out, "      <label>NCSS</label>")?;
    writeln!(out, "      <label>CCN</label>")?;
    writeln!(out, "    </labels>")?;

    let mut n = 0usize;
    let mut ncss_sum = 0usize;
    let mut ccn_sum = 0u32;
    for file in files {
        for function in &file.function_list {
            n += 1;
            ncss_sum += function.nloc;
            ccn_sum += function.cyclomatic_complexity;
            writeln!(
                out,
                "    <item name=\"{} at {}:{}\">",
                escape(&function.long_name),
                escape(&filename_string(&file.filename)),
                function.start_line,
            )?;
            writeln!(out, "      <value>{}</value>", function.nloc)?;
            writeln!(out, "      <value>{}</value>", function.cyclomatic_complexity)?;
            writeln!(out, "    </item>")?;
        }
    }

    let denom = n.max(1) as f64;
    writeln!(
        out,
        "    <average lable=\"NCSS\" value=\"{:.2}\"/>",
        ncss_sum as f64 / denom
    )?;
    writeln!(
        out,
        "    <average lable=\"CCN\" value=\"{:.2}\"/>",
        ccn_sum as f64 / denom
    )?;
    writeln!(out, "    <sum lable=\"NCSS\" value=\"{ncss_sum}\"/>")?;
    writeln!(out, "    <sum lable=\"CCN\" value=\"{ccn_sum}\"/>")?;
    writeln!(out, "  </measure>")
}

fn write_file_measure(out: &mut dyn Write, files: &[FileInformation]) -> io::Result<()> {
    writeln!(out, "  <measure type=\"File\">")?;
    writeln!(out, "    <labels>")?;
    writeln!(out, "      <label>NCSS</label>")?;
    writeln!(out, "      <label>CCN</label>")?;
    writeln!(out, "    </labels>")?;

    let mut nloc_sum = 0usize;
    let mut ccn_sum = 0u32;
    for file in files {
        nloc_sum += file.nloc;
        ccn_sum += file.ccn();
        writeln!(out, "    <item name=\"{}\">", escape(&filename_string(&file.filename)))?;
        writeln!(out, "      <value>{}</value>", file.nloc)?;
        writeln!(out, "      <value>{}</value>", file.ccn())?;
        writeln!(out, "    </item>")?;
    }

    let denom = files.len().max(1) as f64;
    writeln!(
        out,
        "    <average lable=\"NCSS\" value=\"{:.2}\"/>",
        nloc_sum as f64 / denom
    )?;
    writeln!(
        out,
        "    <average lable=\"CCN\" value=\"{:.2}\"/>",
        ccn_sum as f64 / denom
    )?;
    writeln!(out, "    <sum lable=\"NCSS\" value=\"{nloc_sum}\"/>")?;
    writeln!(out, "    <sum lable=\"CCN\" value=\"{ccn_sum}\"/>")?;
    writeln!(out, "  </measure>")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
