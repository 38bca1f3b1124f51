use std::{fmt::Write as _, fs, path::Path};

use shared::{domain::TalkGroup, error::ScheduleError, markup::escape_html};

use crate::{format_duration, format_slot};

const SUMMARY_MARKER: &str = "{{summary}}";
const DETAILS_MARKER: &str = "{{details}}";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="fr" lang="fr" dir="ltr">
<head>
	<title>Output</title>
	<meta charset="UTF-8">
	<style>
		body {
			font-family: arial;
			font-size: 12px;
		}
		tr.tableHeader td {
			font-weight: bold;
			background-color:#DDDDDD;
		}
		td {
			border:1px solid black;
			padding: 3px;
			margin: 0;
		}
		table {
			width: 100%;
			border-spacing: 0;
			border-collapse: collapse;
		}
		h3 {
			width: 65%;
			float: left;
			margin-top: 20px;
			margin-left: 20px;
		}
		div.facts {
			text-align: right;
			width: 30%;
			margin-top: 20px;
			float: right;
		}
		p.desc {
			clear: both;
			margin-top: 0px;
			margin-left: 40px;
			margin-bottom: 7px;
		}
	</style>
</head>
<body>

<h1>Programme</h1>
<table>
	<tr class="tableHeader">
		<td>Durée</td>
		<td>Lieu</td>
		<td>Format</td>
		<td>Titre</td>
		<td>Speakers</td>
	</tr>
{{summary}}</table>

<h1>Détail</h1>

{{details}}</body>
</html>
"#;

/// Render the whole report page: the summary table followed by the detail view.
///
/// Every field is escaped except the pre-rendered description HTML.
pub fn render_html(groups: &[TalkGroup<'_>]) -> String {
    // Markers are located in the template only, never in rendered rows.
    let (head, rest) = PAGE_TEMPLATE
        .split_once(SUMMARY_MARKER)
        .unwrap_or((PAGE_TEMPLATE, ""));
    let (middle, tail) = rest.split_once(DETAILS_MARKER).unwrap_or((rest, ""));

    let summary = summary_rows(groups);
    let details = detail_blocks(groups);

    let mut html = String::with_capacity(PAGE_TEMPLATE.len() + summary.len() + details.len());
    html.push_str(head);
    html.push_str(&summary);
    html.push_str(middle);
    html.push_str(&details);
    html.push_str(tail);
    html
}

pub fn write_html(path: impl AsRef<Path>, html: &str) -> Result<(), ScheduleError> {
    let path = path.as_ref();
    fs::write(path, html).map_err(|source| ScheduleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn summary_rows(groups: &[TalkGroup<'_>]) -> String {
    let mut html = String::new();
    for group in groups {
        let _ = writeln!(html, "\t<tr class=\"tableHeader\">");
        let _ = writeln!(
            html,
            "\t\t<td colspan=\"5\">{}</td>",
            escape_html(&format_slot(group.day_label, group.start_hour, group.start_minute))
        );
        let _ = writeln!(html, "\t</tr>");

        for talk in &group.talks {
            let _ = writeln!(html, "\t<tr>");
            let _ = writeln!(
                html,
                "\t\t<td style=\"white-space: nowrap;\">{}</td>",
                format_duration(talk.duration_hours, talk.duration_minutes)
            );
            let _ = writeln!(html, "\t\t<td>{}</td>", escape_html(talk.venue()));
            let _ = writeln!(html, "\t\t<td>{}</td>", escape_html(&talk.raw.format));
            let _ = writeln!(html, "\t\t<td>{}</td>", escape_html(&talk.raw.name));
            let _ = writeln!(
                html,
                "\t\t<td>{}</td>",
                talk.first_speaker().map(escape_html).unwrap_or_default()
            );
            let _ = writeln!(html, "\t</tr>");
        }
    }
    html
}

fn detail_blocks(groups: &[TalkGroup<'_>]) -> String {
    let mut html = String::new();
    for group in groups {
        let _ = writeln!(html, "<hr />");
        let _ = writeln!(
            html,
            "<h2>{}</h2>",
            escape_html(&format_slot(group.day_label, group.start_hour, group.start_minute))
        );

        for talk in &group.talks {
            let _ = writeln!(html, "<h3>{}</h3>", escape_html(&talk.raw.name));
            let _ = writeln!(html, "<div class=\"facts\">");
            let _ = writeln!(html, "\t[{}]", escape_html(talk.venue()));
            let _ = writeln!(
                html,
                "\t({})<br/>",
                format_duration(talk.duration_hours, talk.duration_minutes)
            );
            let _ = writeln!(html, "\t<i>{}</i>", escape_html(&talk.speakers.join(", ")));
            let _ = writeln!(html, "</div>");
            let _ = writeln!(html, "{}", talk.description_html);
        }
    }
    html
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
