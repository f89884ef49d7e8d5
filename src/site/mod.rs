//! The report assembler: everything between finished records and files on
//! disk. Page HTML is assembled in [pages], [markdown] wraps the renderer,
//! and [PageSink] abstracts the output directory.

pub mod markdown;
pub mod pages;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::{
    analysis::{AggregateReport, ProjectGroup},
    notes::record::SessionRecord,
    projects::ProjectTable,
};

/// Destination for generated pages.
#[cfg_attr(test, mockall::automock)]
pub trait PageSink {
    fn write_post(&mut self, stem: &str, html: &str) -> Result<()>;

    fn write_index(&mut self, html: &str) -> Result<()>;
}

/// Writes pages into an output directory, posts one level below the index.
pub struct DirSink {
    out_dir: PathBuf,
}

impl DirSink {
    pub fn new(out_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(out_dir.join("posts"))?;

        Ok(Self { out_dir })
    }
}

impl PageSink for DirSink {
    fn write_post(&mut self, stem: &str, html: &str) -> Result<()> {
        let path = self.out_dir.join("posts").join(format!("{stem}.html"));
        debug!("Writing {path:?}");
        std::fs::write(path, html)?;
        Ok(())
    }

    fn write_index(&mut self, html: &str) -> Result<()> {
        std::fs::write(self.out_dir.join("index.html"), html)?;
        Ok(())
    }
}

/// Emits one page per record plus the index. Records arrive deduplicated, so
/// every accepted note gets exactly one post page.
pub fn write_site(
    records: &[SessionRecord],
    groups: &[ProjectGroup],
    table: &ProjectTable,
    report: &AggregateReport,
    today: NaiveDate,
    sink: &mut impl PageSink,
) -> Result<()> {
    for record in records {
        let html = pages::post_page(&record.title, &record.stem, &record.body_html);
        sink.write_post(&record.stem, &html)?;
    }
    sink.write_index(&pages::index_page(table, records, groups, report, today))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::{
        analysis::{build_report, project_groups},
        notes::record::prepare_note,
        projects::ProjectTable,
    };

    use super::{write_site, DirSink, MockPageSink, PageSink};

    fn fixtures() -> (ProjectTable, Vec<crate::notes::record::SessionRecord>) {
        let table = ProjectTable::builtin();
        let records = vec![
            prepare_note(
                "2024-06-04",
                "tags: GradeSense\nduration: 45m\n# Tuesday\n",
                &table,
            )
            .unwrap(),
            prepare_note(
                "2024-06-03",
                "tags: GradeSense\nduration: 1h 15m\n# Monday\n",
                &table,
            )
            .unwrap(),
        ];
        (table, records)
    }

    fn test_now() -> chrono::DateTime<chrono::Local> {
        use chrono::TimeZone;
        chrono::Local
            .from_local_datetime(&chrono::NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            ))
            .unwrap()
    }

    #[test]
    fn test_exactly_one_page_per_record_plus_index() -> Result<()> {
        let (table, records) = fixtures();
        let report = build_report(&records, test_now());
        let groups = project_groups(&records, &table);

        let mut sink = MockPageSink::new();
        sink.expect_write_post()
            .times(records.len())
            .returning(|_, _| Ok(()));
        sink.expect_write_index().times(1).returning(|_| Ok(()));

        write_site(
            &records,
            &groups,
            &table,
            &report,
            test_now().date_naive(),
            &mut sink,
        )
    }

    #[test]
    fn test_dir_sink_layout() -> Result<()> {
        let out = tempdir()?;
        let mut sink = DirSink::new(out.path().to_path_buf())?;
        sink.write_post("2024-06-03", "<html></html>")?;
        sink.write_index("<html></html>")?;

        assert!(out.path().join("posts/2024-06-03.html").is_file());
        assert!(out.path().join("index.html").is_file());
        Ok(())
    }
}
