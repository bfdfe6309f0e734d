use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

static ARTICLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<REUTERS[^>]*NEWID="(?P<id>\d+)"[^>]*>(?P<article>.*?)</REUTERS>"#).unwrap()
});
static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<TITLE>(.*?)</TITLE>").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<DATE>(.*?)</DATE>").unwrap());
static BODY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<BODY>(.*?)</BODY>").unwrap());
static NUMERIC_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#\d{1,3};").unwrap());

/// One news article recovered from an SGML collection file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNews {
    pub new_id: String,
    pub title: String,
    pub date: String,
    pub body: String,
}

impl ExtractedNews {
    /// File layout for the extracted article: title line, date line, blank
    /// line, body.
    pub fn to_file_content(&self) -> String {
        format!("{}\n{}\n\n{}", self.title, self.date, self.body)
    }
}

/// Parses every `<REUTERS>` block in an SGML collection.
///
/// Missing `<TITLE>`, `<DATE>`, or `<BODY>` elements yield empty strings
/// rather than dropping the article.
pub fn parse_sgm(content: &str) -> Vec<ExtractedNews> {
    ARTICLE_RE
        .captures_iter(content)
        .map(|caps| {
            let article = &caps["article"];

            ExtractedNews {
                new_id: caps["id"].to_string(),
                title: first_capture(&TITLE_RE, article),
                date: first_capture(&DATE_RE, article),
                body: first_capture(&BODY_RE, article),
            }
        })
        .collect()
}

fn first_capture(re: &Regex, article: &str) -> String {
    re.captures(article)
        .and_then(|caps| caps.get(1))
        .map(|found| clean_text(found.as_str().trim()))
        .unwrap_or_default()
}

/// Strips numeric character references (`&#N;`) and the stray `&lt;`
/// markers the Reuters files carry.
fn clean_text(text: &str) -> String {
    NUMERIC_ENTITY_RE.replace_all(text, "").replace("&lt;", "")
}

/// Extracts every article from the `.sgm` files in `sgm_dir` into one text
/// file each under `data_dir`.
///
/// Creates `data_dir` if needed. Returns the number of articles written.
pub fn extract_news(sgm_dir: &Path, data_dir: &Path) -> anyhow::Result<usize> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("creating news directory {}", data_dir.display()))?;

    let entries = fs::read_dir(sgm_dir)
        .with_context(|| format!("reading SGML directory {}", sgm_dir.display()))?;

    let mut extracted = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !is_sgm_file(&path) {
            continue;
        }

        // The Reuters collections predate UTF-8; decode leniently.
        let bytes =
            fs::read(&path).with_context(|| format!("reading SGML file {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);

        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("reuters");

        for news in parse_sgm(&content) {
            let article_path = data_dir.join(format!("{}-{}.txt", stem, news.new_id));
            fs::write(&article_path, news.to_file_content())
                .with_context(|| format!("writing article {}", article_path.display()))?;
            extracted += 1;
        }
    }

    tracing::info!(
        "Extracted {} news articles from {}",
        extracted,
        sgm_dir.display()
    );

    Ok(extracted)
}

/// Accepts plain, non-hidden `.sgm` files.
fn is_sgm_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => !name.starts_with('.') && name.to_lowercase().ends_with(".sgm"),
        None => false,
    }
}
