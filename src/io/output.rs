use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Task;

/// Write pretty JSON to a file, or to stdout when no path is given
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create file: {:?}", path))?;
            serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value).context("Failed to write JSON")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Render a study task as a standalone markdown document
pub fn render_task_markdown(task: &Task) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", task.topic));
    output.push_str(task.explanation.trim());
    output.push_str("\n");

    if !task.videos.is_empty() {
        output.push_str("\n## Videos\n\n");
        for video in &task.videos {
            output.push_str(&format!("- [{}]({})\n", video.title, video.url));
        }
    }

    output
}

/// Write one `<slug>.md` file per task into `dir`, creating it if needed
pub fn write_task_markdown(tasks: &[Task], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {:?}", dir))?;

    let mut paths = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let mut slug = slugify(&task.topic);
        if slug.is_empty() {
            slug = format!("resource-{}", index + 1);
        }
        let path = dir.join(format!("{}.md", slug));
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", render_task_markdown(task))?;
        paths.push(path);
    }

    Ok(paths)
}

/// Lowercase ASCII alphanumerics joined by single dashes
pub fn slugify(topic: &str) -> String {
    topic
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
