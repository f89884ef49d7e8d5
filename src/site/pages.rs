//! Plain string assembly of the two page shapes. Pages reference a
//! `style.css` the build never writes, styling stays a user-owned asset.

use chrono::NaiveDate;

use crate::{
    analysis::{
        calendar::{calendar_grid, CalendarCell, HEATMAP_WEEKS},
        AggregateReport, ProjectGroup,
    },
    notes::{duration::format_duration, record::SessionRecord},
    projects::{ProjectInfo, ProjectTable},
};

/// One standalone post document.
pub fn post_page(title: &str, date_label: &str, body_html: &str) -> String {
    format!(
        "<!doctype html>
<html>
<head>
  <meta charset=\"utf-8\">
  <title>{title} — Sommet Innovations</title>
  <link rel=\"stylesheet\" href=\"../style.css\">
</head>
<body>

<header>
  <a href=\"../index.html\">← Development Log</a>
</header>

<article>
{body_html}
</article>

<footer>
  <p>Sommet Innovations · Development Log · {date_label}</p>
</footer>

</body>
</html>
"
    )
}

/// The aggregate index document: about blurb, activity statistics, calendar
/// heatmap, recent activity, then one section per known project.
pub fn index_page(
    table: &ProjectTable,
    records: &[SessionRecord],
    groups: &[ProjectGroup],
    report: &AggregateReport,
    today: NaiveDate,
) -> String {
    let mut sections = String::new();
    sections.push_str(&stats_section(records, report, today));
    for group in groups {
        if let Some(info) = table.get(&group.project) {
            sections.push_str(&project_section(info, group, records, report));
        }
    }

    format!(
        "<!doctype html>
<html>
<head>
  <meta charset=\"utf-8\">
  <title>Sommet Innovations — Development Log</title>
  <link rel=\"stylesheet\" href=\"style.css\">
</head>
<body>

<header>
  <h1>Sommet Innovations</h1>
</header>

<section class=\"about\">
  <p>
    This site documents ongoing research and development at <strong>Sommet Innovations</strong>.
  </p>
</section>

{sections}
</body>
</html>
"
    )
}

fn stats_section(records: &[SessionRecord], report: &AggregateReport, today: NaiveDate) -> String {
    let mut out = String::from(
        "<section class=\"stats\">
  <h2>Activity</h2>
  <ul class=\"stat-cards\">
",
    );
    out.push_str(&format!(
        "    <li><strong>{}</strong> sessions this week · {}</li>\n",
        report.week.sessions,
        format_duration(report.week.minutes)
    ));
    out.push_str(&format!(
        "    <li><strong>{}</strong> sessions this month · {}</li>\n",
        report.month.sessions,
        format_duration(report.month.minutes)
    ));
    out.push_str(&format!(
        "    <li><strong>{}</strong> day current streak · longest {}</li>\n",
        report.current_streak, report.longest_streak
    ));
    out.push_str(&format!(
        "    <li><strong>{}</strong> sessions logged · {} · avg {}</li>\n",
        report.total.sessions,
        format_duration(report.total.minutes),
        format_duration(report.average_minutes)
    ));
    out.push_str("  </ul>\n");

    out.push_str(&heatmap(report, today));
    out.push_str(&recent_list(records, report));
    out.push_str("</section>\n");
    out
}

fn heatmap(report: &AggregateReport, today: NaiveDate) -> String {
    let grid = calendar_grid(&report.days, today, HEATMAP_WEEKS);

    let mut out = String::from("  <table class=\"calendar\">\n");
    for day_row in 0..7 {
        out.push_str("    <tr>");
        for week in &grid {
            match week.get(day_row) {
                Some(cell) => out.push_str(&calendar_cell(cell)),
                None => out.push_str("<td></td>"),
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("  </table>\n");
    out
}

fn calendar_cell(cell: &CalendarCell) -> String {
    let tooltip = match cell.sessions {
        0 => cell.date.to_string(),
        1 => format!(
            "1 session · {} · {}",
            format_duration(cell.minutes),
            cell.date
        ),
        n => format!(
            "{n} sessions · {} · {}",
            format_duration(cell.minutes),
            cell.date
        ),
    };
    format!(
        "<td class=\"{}\" title=\"{tooltip}\"></td>",
        cell.intensity().css_class()
    )
}

fn recent_list(records: &[SessionRecord], report: &AggregateReport) -> String {
    if report.recent.is_empty() {
        return String::new();
    }

    let mut out = String::from("  <ul class=\"recent\">\n");
    for &index in &report.recent {
        let record = &records[index];
        out.push_str(&format!(
            "    <li><a href=\"posts/{stem}.html\">{title}</a> <small>{stem}</small></li>\n",
            stem = record.stem,
            title = record.title,
        ));
    }
    out.push_str("  </ul>\n");
    out
}

fn project_section(
    info: &ProjectInfo,
    group: &ProjectGroup,
    records: &[SessionRecord],
    report: &AggregateReport,
) -> String {
    let heading = match (&info.emoji, &info.category) {
        (Some(emoji), Some(category)) => format!(
            "{emoji} {} <small class=\"category\">{category}</small>",
            info.title
        ),
        (Some(emoji), None) => format!("{emoji} {}", info.title),
        (None, Some(category)) => {
            format!("{} <small class=\"category\">{category}</small>", info.title)
        }
        (None, None) => info.title.clone(),
    };

    let mut out = format!(
        "
<section class=\"project\">
  <h2>{heading}</h2>
  <p class=\"summary\">{}</p>
",
        info.summary
    );

    if let Some(totals) = report
        .projects
        .iter()
        .find(|totals| totals.project == group.project)
    {
        out.push_str(&format!(
            "  <p class=\"project-total\">{} sessions · {}</p>\n",
            totals.sessions,
            format_duration(totals.minutes)
        ));
    }

    out.push_str("\n  <ul class=\"post-list\">\n");
    for &index in &group.entries {
        let record = &records[index];
        out.push_str(&format!(
            "    <li><a href=\"posts/{stem}.html\">{title}</a> <small>{stem}</small></li>\n",
            stem = record.stem,
            title = record.title,
        ));
    }
    out.push_str(
        "
  </ul>
</section>
",
    );
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        analysis::{build_report, project_groups},
        notes::record::prepare_note,
        projects::ProjectTable,
    };

    use super::{index_page, post_page};

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
    fn test_post_page_shell() {
        let html = post_page("Hill repeats", "2024-06-03", "<h1>Hill repeats</h1>");
        assert!(html.contains("<title>Hill repeats — Sommet Innovations</title>"));
        assert!(html.contains("href=\"../index.html\""));
        assert!(html.contains("href=\"../style.css\""));
        assert!(html.contains("Development Log · 2024-06-03"));
    }

    #[test]
    fn test_index_page_contents() {
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
        let report = build_report(&records, test_now());
        let groups = project_groups(&records, &table);

        let html = index_page(&table, &records, &groups, &report, test_now().date_naive());

        assert!(html.contains("<strong>2</strong> sessions this week · 2h"));
        assert!(html.contains("<h2>GradeSense</h2>"));
        assert!(html.contains("posts/2024-06-04.html"));
        assert!(html.contains("posts/2024-06-03.html"));
        // Both days carry one session each, so the heatmap has low cells
        // with duration tooltips.
        assert!(html.contains("cal-low"));
        assert!(html.contains("1 session · 1h 15m · 2024-06-03"));
        // Empty project table entries would still render; here every section
        // has posts.
        assert!(html.contains("2 sessions · 2h"));
    }

    #[test]
    fn test_index_page_with_no_records() {
        let table = ProjectTable::builtin();
        let report = build_report(&[], test_now());
        let groups = project_groups(&[], &table);

        let html = index_page(&table, &[], &groups, &report, test_now().date_naive());
        assert!(html.contains("<strong>0</strong> sessions this week"));
        // The known project still gets its section, with an empty list.
        assert!(html.contains("<h2>GradeSense</h2>"));
        assert!(!html.contains("posts/"));
    }
}
