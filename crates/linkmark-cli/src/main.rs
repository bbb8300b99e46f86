use anyhow::{Context, Result, bail};
use linkmark_config::Config;
use linkmark_engine::{
    ClassifiedLink, FormattingElement, LinkStatistics, LinkType, UrlHelper, WebUrlHelper,
    classify_anchors_with,
};
use std::{env, fs, path::PathBuf, process};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Links {
        file: PathBuf,
        page_url: Option<String>,
    },
    Element {
        tag: String,
        start: i64,
        end: i64,
        content: String,
    },
    SetPermalink {
        url: String,
    },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [] => bail!("missing input file"),
        [flag, ..] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [flag, rest @ ..] if flag == "--element" => {
            let [tag, start, end, content @ ..] = rest else {
                bail!("--element expects: TAG START END [CONTENT]");
            };
            if let [_, extra, ..] = content {
                bail!("unexpected argument: {extra}");
            }
            Ok(Command::Element {
                tag: tag.clone(),
                start: start
                    .parse()
                    .with_context(|| format!("invalid start position '{start}'"))?,
                end: end
                    .parse()
                    .with_context(|| format!("invalid end position '{end}'"))?,
                content: content.first().cloned().unwrap_or_default(),
            })
        }
        [flag, url] if flag == "--set-permalink" => Ok(Command::SetPermalink { url: url.clone() }),
        [flag, ..] if flag == "--set-permalink" => bail!("--set-permalink expects: URL"),
        [file] => Ok(Command::Links {
            file: PathBuf::from(file),
            page_url: None,
        }),
        [file, page_url] => Ok(Command::Links {
            file: PathBuf::from(file),
            page_url: Some(page_url.clone()),
        }),
        [_, _, extra, ..] => bail!("unexpected argument: {extra}"),
    }
}

/// One line per anchor followed by per-type totals.
fn report_links(html: &str, permalink: &str) -> String {
    let helper = WebUrlHelper;
    let links: Vec<ClassifiedLink<'_>> = classify_anchors_with(&helper, html, permalink).collect();
    let mut out = String::new();

    for link in &links {
        let href = helper.anchor_url(link.anchor).unwrap_or_default();
        out.push_str(&format!("{}\t{}\t{href}\n", link.link_type, link.follow));
    }

    let stats: LinkStatistics = links.into_iter().collect();
    out.push_str(&format!("total\t{}\n", stats.total));
    for link_type in [LinkType::Internal, LinkType::External, LinkType::Other] {
        let counts = stats.get(link_type);
        out.push_str(&format!(
            "{link_type}\t{} ({} dofollow, {} nofollow)\n",
            counts.total, counts.dofollow, counts.nofollow
        ));
    }
    out
}

fn resolve_permalink(page_url: Option<String>) -> Result<String> {
    if let Some(page_url) = page_url {
        return Ok(page_url);
    }

    let config_path = Config::config_path();
    log::debug!("No page URL given, checking {}", config_path.display());
    match Config::load()? {
        Some(Config {
            permalink: Some(permalink),
        }) => {
            log::info!("Using permalink from {}", config_path.display());
            Ok(permalink)
        }
        _ => bail!(
            "no page URL given and no permalink set in {}",
            config_path.display()
        ),
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => print_usage(),
        Command::Links { file, page_url } => {
            let html = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let permalink = resolve_permalink(page_url)?;
            print!("{}", report_links(&html, &permalink));
        }
        Command::Element {
            tag,
            start,
            end,
            content,
        } => {
            let element = FormattingElement::new(tag, start, end);
            println!("{}", element.to_html(&content));
        }
        Command::SetPermalink { url } => {
            let mut config = Config::load()?.unwrap_or_default();
            config.permalink = Some(url);
            config.save()?;
            log::info!("Saved permalink to {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn print_usage() {
    println!("Usage: linkmark-cli <FILE> [PAGE_URL]");
    println!("       linkmark-cli --element <TAG> <START> <END> [CONTENT]");
    println!("       linkmark-cli --set-permalink <PAGE_URL>");
    println!();
    println!("Without PAGE_URL the permalink from the config file is used:");
    println!("  {}", Config::config_path().display());
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e:#}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_file_and_page_url() {
        assert_eq!(
            parse_args(&args(&["post.html", "https://example.com/"])).unwrap(),
            Command::Links {
                file: PathBuf::from("post.html"),
                page_url: Some("https://example.com/".to_string()),
            }
        );
        assert_eq!(
            parse_args(&args(&["post.html"])).unwrap(),
            Command::Links {
                file: PathBuf::from("post.html"),
                page_url: None,
            }
        );
    }

    #[test]
    fn parses_element_command() {
        assert_eq!(
            parse_args(&args(&["--element", "em", "10", "-5", "hi"])).unwrap(),
            Command::Element {
                tag: "em".to_string(),
                start: 10,
                end: -5,
                content: "hi".to_string(),
            }
        );
    }

    #[test]
    fn parses_set_permalink_command() {
        assert_eq!(
            parse_args(&args(&["--set-permalink", "https://example.com/"])).unwrap(),
            Command::SetPermalink {
                url: "https://example.com/".to_string(),
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["a.html", "https://x.com", "extra"])).is_err());
        assert!(parse_args(&args(&["--element", "em", "1"])).is_err());
        assert!(parse_args(&args(&["--element", "em", "one", "2"])).is_err());
        assert!(parse_args(&args(&["--element", "em", "1", "2", "x", "y"])).is_err());
        assert!(parse_args(&args(&["--set-permalink"])).is_err());
        assert!(parse_args(&args(&["--set-permalink", "a", "b"])).is_err());
    }

    #[test]
    fn reports_each_link_and_totals() {
        let html = r##"<a href="/a">A</a> <a href="https://rust-lang.org" rel="nofollow">R</a> <a href="#top">T</a>"##;
        assert_eq!(
            report_links(html, "https://example.com/"),
            "internal\tdofollow\t/a\n\
             external\tnofollow\thttps://rust-lang.org\n\
             other\tdofollow\t#top\n\
             total\t3\n\
             internal\t1 (1 dofollow, 0 nofollow)\n\
             external\t1 (0 dofollow, 1 nofollow)\n\
             other\t1 (1 dofollow, 0 nofollow)\n"
        );
    }
}
