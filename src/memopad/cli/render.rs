use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use memopad::api::{CmdMessage, MessageLevel};
use memopad::model::Memo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const ID_WIDTH: usize = 6;
const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_memo_list(memos: &[Memo]) {
    if memos.is_empty() {
        println!("No memos found.");
        return;
    }

    let now = Utc::now();
    for memo in memos {
        let (id, body, time) = list_columns(memo, now);
        println!("{}{}{}", id.yellow(), body, time.dimmed());
    }
}

pub(super) fn print_full_memos(memos: &[Memo]) {
    for (i, memo) in memos.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", memo.id).yellow(),
            memo.title.bold()
        );
        println!("{}", timestamps_line(memo).dimmed());
        println!("--------------------------------");
        println!("{}", memo.content);
    }
}

/// Splits one list row into its id, title/preview and relative-time columns,
/// padded so the time column lines up at `LINE_WIDTH`.
fn list_columns(memo: &Memo, now: DateTime<Utc>) -> (String, String, String) {
    let id = format!("{:>width$}. ", memo.id, width = ID_WIDTH - 2);

    let preview = memo.preview().replace('\n', " ");
    let title_content = if preview.is_empty() {
        memo.title.clone()
    } else {
        format!("{}  {}", memo.title, preview)
    };

    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + TIME_WIDTH);
    let body = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(body.width());

    let body = format!("{}{}", body, " ".repeat(padding));
    let time = format!(
        "{:>width$}",
        format_time_ago(memo.updated_at, now),
        width = TIME_WIDTH
    );
    (id, body, time)
}

fn timestamps_line(memo: &Memo) -> String {
    format!(
        "Created {}  ·  Updated {}",
        format_date(memo.created_at),
        format_date(memo.updated_at)
    )
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

fn format_time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);
    if duration.num_seconds() < 60 {
        return "just now".to_string();
    }

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
