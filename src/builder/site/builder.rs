use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use comrak::Options;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::builder::asset::{copy_asset, discover_assets, StaticAsset};
use crate::builder::page::{collect_pages, determine_output_path, read_page};
use crate::builder::site::report::{BuildFailure, BuildReport, TaskOutcome};
use crate::config::Config;
use crate::layout::{LayoutRenderer, TemplateDocument};
use crate::markdown::create_comrak_options;
use crate::utils::error::{BuildError, BuildResult};
use crate::utils::fs;

/// A unit of work for the worker pool
#[derive(Debug)]
enum BuildTask {
    Page(PathBuf),
    Asset(StaticAsset),
}

impl BuildTask {
    fn source(&self) -> &Path {
        match self {
            BuildTask::Page(path) => path,
            BuildTask::Asset(asset) => &asset.path,
        }
    }
}

/// Shared, read-only state every task sees
struct BuildContext<'a> {
    destination: &'a Path,
    template: &'a TemplateDocument,
    renderer: &'a LayoutRenderer,
    options: &'a Options<'a>,
}

/// Build the site described by `config`.
///
/// The layout is loaded first; if it is missing the build stops with
/// `TemplateNotFound` before anything is written. Every page and asset is
/// then processed on a bounded worker pool, and all of them have finished
/// when this returns. Per-file failures are collected in the report.
pub fn build_site(config: &Config) -> BuildResult<BuildReport> {
    let start = Instant::now();
    let template = load_layout(config)?;
    build_with_layout(config, &template, start)
}

/// Remove the previous output, then build.
///
/// The layout is checked before anything is removed, so a build that cannot
/// start leaves the old output in place.
pub fn rebuild_site(config: &Config) -> BuildResult<BuildReport> {
    let start = Instant::now();
    let template = load_layout(config)?;
    clean_site(config)?;
    build_with_layout(config, &template, start)
}

fn load_layout(config: &Config) -> BuildResult<TemplateDocument> {
    let layout_path = config.layout_path();
    info!("Loading layout {}", layout_path.display());
    TemplateDocument::load(&layout_path)
}

fn build_with_layout(config: &Config, template: &TemplateDocument, start: Instant) -> BuildResult<BuildReport> {
    let layout_path = template.path();
    let renderer = LayoutRenderer::new().map_err(|e| BuildError::template(layout_path, e))?;
    debug!("Layout {} ready", template.path().display());

    info!("Collecting pages and assets...");
    let pages = collect_pages(&config.pages_path(), &config.page_pattern);
    let (pages, mut shadowed) = resolve_collisions(
        pages,
        |page| determine_output_path(page, &config.destination),
        |page| page.as_path(),
    );
    let assets = discover_assets(&config.source, &config.destination, &config.assets);
    let (assets, shadowed_assets) = resolve_collisions(assets, |asset| asset.output_path.clone(), |asset| asset.path.as_path());
    shadowed.extend(shadowed_assets);
    info!("Found {} pages and {} assets", pages.len(), assets.len());

    let tasks: Vec<BuildTask> = assets
        .into_iter()
        .map(BuildTask::Asset)
        .chain(pages.into_iter().map(BuildTask::Page))
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count())
        .build()
        .map_err(|e| BuildError::Pool(e.to_string()))?;
    debug!("Running {} tasks on {} threads", tasks.len(), pool.current_num_threads());

    let options = create_comrak_options();
    let context = BuildContext {
        destination: &config.destination,
        template,
        renderer: &renderer,
        options: &options,
    };

    let outcomes: Vec<TaskOutcome> = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| run_task(task, &context))
            .collect()
    });

    let mut report = BuildReport::new(shadowed);
    for outcome in outcomes {
        report.record(outcome);
    }
    report.elapsed = start.elapsed();
    Ok(report)
}

/// Remove the output directory
pub fn clean_site(config: &Config) -> BuildResult<bool> {
    let removed = fs::remove_directory(&config.destination)?;
    if removed {
        info!("Removed {}", config.destination.display());
    } else {
        debug!("Nothing to clean at {}", config.destination.display());
    }
    Ok(removed)
}

fn run_task(task: &BuildTask, context: &BuildContext<'_>) -> TaskOutcome {
    let result = match task {
        BuildTask::Page(source) => build_page(source, context).map(|output| TaskOutcome::PageWritten {
            source: source.clone(),
            output,
        }),
        BuildTask::Asset(asset) => {
            debug!("Copying {} asset {} (.{})", asset.kind, asset.path.display(), asset.extension);
            copy_asset(asset).map(|bytes| TaskOutcome::AssetCopied {
                source: asset.path.clone(),
                output: asset.output_path.clone(),
                bytes,
            })
        }
    };

    result.unwrap_or_else(|error| {
        TaskOutcome::Failed(BuildFailure {
            path: task.source().to_path_buf(),
            error,
        })
    })
}

/// Read, convert, lay out and write one page
fn build_page(source: &Path, context: &BuildContext<'_>) -> BuildResult<PathBuf> {
    let page = read_page(source, context.destination, context.options)?;
    let html = context
        .renderer
        .render(context.template, &page)
        .map_err(|e| BuildError::template(&page.path, e))?;
    fs::write_file(&page.output_path, html)?;
    Ok(page.output_path)
}

/// Keep one source per flattened output path.
///
/// `items` must be sorted by source path; the last one claiming an output
/// wins and the earlier ones are returned as shadowed, in source order.
fn resolve_collisions<T, O, S>(items: Vec<T>, output_of: O, source_of: S) -> (Vec<T>, Vec<PathBuf>)
where
    O: Fn(&T) -> PathBuf,
    S: Fn(&T) -> &Path,
{
    let mut by_output: BTreeMap<PathBuf, T> = BTreeMap::new();
    let mut shadowed = Vec::new();

    for item in items {
        let output = output_of(&item);
        let source = source_of(&item).to_path_buf();
        if let Some(previous) = by_output.insert(output.clone(), item) {
            let previous = source_of(&previous).to_path_buf();
            warn!(
                "{} and {} both build {}; keeping {}",
                previous.display(),
                source.display(),
                output.display(),
                source.display()
            );
            shadowed.push(previous);
        }
    }

    let mut kept: Vec<T> = by_output.into_values().collect();
    kept.sort_by(|a, b| source_of(a).cmp(source_of(b)));
    (kept, shadowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    const LAYOUT: &str = "<html><head><title><%= title %></title></head>\
<body>&lt;!-- layout --&gt;<%= content %></body></html>";

    fn write(root: &Path, relative: &str, contents: &[u8]) {
        let path = root.join(relative);
        stdfs::create_dir_all(path.parent().unwrap()).unwrap();
        stdfs::write(path, contents).unwrap();
    }

    fn site(dir: &TempDir) -> Config {
        Config {
            source: dir.path().join("src"),
            destination: dir.path().join("dist"),
            jobs: Some(2),
            ..Config::default()
        }
    }

    #[test]
    fn test_builds_pages_and_assets() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "layouts/layout.html", LAYOUT.as_bytes());
        write(&src, "pages/index.md", b"---\ntitle: Home\n---\nWelcome\nto the site\n");
        write(&src, "pages/docs/guide.md", b"---\ntitle: Guide\n---\n# Guide\n");
        write(&src, "theme/site.css", b"body { color: red; }");
        write(&src, "theme/app.js", b"console.log(1);");
        write(&src, "theme/logo.png", &[137, 80, 78, 71, 0, 1, 2]);

        let report = build_site(&site(&dir)).unwrap();
        let dist = dir.path().join("dist");

        assert!(report.is_clean(), "{:?}", report.failures);
        assert_eq!(report.pages_written, 2);
        assert_eq!(report.assets_copied, 3);

        let index = stdfs::read_to_string(dist.join("index.html")).unwrap();
        assert!(index.contains("<title>Home</title>"));
        assert!(index.contains("<!-- layout -->"));
        assert!(index.contains("Welcome<br />\nto the site"));
        assert!(!index.contains("<%= content %>"));

        let guide = stdfs::read_to_string(dist.join("guide.html")).unwrap();
        assert!(guide.contains("<h1>Guide</h1>"));
        assert!(!dist.join("docs").exists());

        assert_eq!(stdfs::read(dist.join("css/site.css")).unwrap(), b"body { color: red; }");
        assert_eq!(stdfs::read(dist.join("js/app.js")).unwrap(), b"console.log(1);");
        assert_eq!(stdfs::read(dist.join("img/logo.png")).unwrap(), vec![137, 80, 78, 71, 0, 1, 2]);
    }

    #[test]
    fn test_missing_layout_aborts_without_output() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "pages/index.md", b"# Hi\n");
        write(&src, "site.css", b"a{}");

        let err = build_site(&site(&dir)).unwrap_err();
        assert!(matches!(err, BuildError::TemplateNotFound(_)));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_bad_pages_do_not_stop_others() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "layouts/layout.html", LAYOUT.as_bytes());
        write(&src, "pages/good.md", b"---\ntitle: Good\n---\nok\n");
        write(&src, "pages/broken.md", b"---\ntitle: [unclosed\n---\nbody\n");
        write(&src, "pages/untitled.md", b"no front matter\n");

        let report = build_site(&site(&dir)).unwrap();
        let dist = dir.path().join("dist");

        assert_eq!(report.pages_written, 1);
        assert_eq!(report.failures.len(), 2);
        assert!(dist.join("good.html").exists());
        assert!(!dist.join("broken.html").exists());
        assert!(!dist.join("untitled.html").exists());

        let untitled = report
            .failures
            .iter()
            .find(|f| f.path.ends_with("untitled.md"))
            .unwrap();
        assert!(untitled.error.to_string().contains("missing template key `title`"));
    }

    #[test]
    fn test_same_name_pages_collapse_to_one_output() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "layouts/layout.html", b"<%= content %>");
        write(&src, "pages/a/b/note.md", b"from a/b\n");
        write(&src, "pages/z/note.md", b"from z\n");

        let report = build_site(&site(&dir)).unwrap();
        let dist = dir.path().join("dist");

        assert_eq!(report.pages_written, 1);
        assert_eq!(report.shadowed.len(), 1);
        assert!(report.shadowed[0].ends_with("a/b/note.md"));

        let html_files: Vec<_> = stdfs::read_dir(&dist)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "html").unwrap_or(false))
            .collect();
        assert_eq!(html_files.len(), 1);
        assert!(stdfs::read_to_string(dist.join("note.html")).unwrap().contains("from z"));
    }

    #[test]
    fn test_same_name_assets_keep_last_in_path_order() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "layouts/layout.html", b"<%= content %>");
        write(&src, "a/site.css", &vec![b'A'; 64 * 1024]);
        write(&src, "b/site.css", b"BBBB");
        write(&src, "vendor/jquery.js", b"full");
        write(&src, "vendor/jquery.min.js", b"min");

        for _ in 0..5 {
            let report = build_site(&site(&dir)).unwrap();
            let dist = dir.path().join("dist");

            assert!(report.is_clean(), "{:?}", report.failures);
            assert_eq!(report.assets_copied, 2);
            assert_eq!(report.shadowed.len(), 2);
            assert!(report.shadowed.iter().any(|p| p.ends_with("a/site.css")));
            assert!(report.shadowed.iter().any(|p| p.ends_with("vendor/jquery.js")));
            assert_eq!(stdfs::read(dist.join("css/site.css")).unwrap(), b"BBBB");
            assert_eq!(stdfs::read(dist.join("js/jquery.js")).unwrap(), b"min");
        }
    }

    #[test]
    fn test_resolve_collisions_reports_each_shadowed_source() {
        let pages = vec![
            PathBuf::from("pages/a/note.md"),
            PathBuf::from("pages/b/note.md"),
            PathBuf::from("pages/c/note.md"),
            PathBuf::from("pages/index.md"),
        ];
        let destination = Path::new("dist");
        let (kept, shadowed) = resolve_collisions(pages, |p| determine_output_path(p, destination), |p| p.as_path());

        assert_eq!(kept, vec![PathBuf::from("pages/c/note.md"), PathBuf::from("pages/index.md")]);
        assert_eq!(shadowed, vec![PathBuf::from("pages/a/note.md"), PathBuf::from("pages/b/note.md")]);
    }

    #[test]
    fn test_output_reads_back_identical_to_render() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src, "layouts/layout.html", LAYOUT.as_bytes());
        write(&src, "pages/page.md", b"---\ntitle: Same\n---\nText & more\n");

        build_site(&site(&dir)).unwrap();

        let template = TemplateDocument::load(src.join("layouts/layout.html")).unwrap();
        let page = read_page(&src.join("pages/page.md"), &dir.path().join("dist"), &create_comrak_options()).unwrap();
        let expected = LayoutRenderer::new().unwrap().render(&template, &page).unwrap();

        assert_eq!(stdfs::read(&page.output_path).unwrap(), expected.into_bytes());
    }

    #[test]
    fn test_rebuild_keeps_output_when_layout_missing() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        write(&config.source, "pages/index.md", b"# Hi\n");
        write(&config.destination, "index.html", b"previous build");

        let err = rebuild_site(&config).unwrap_err();
        assert!(matches!(err, BuildError::TemplateNotFound(_)));
        assert_eq!(stdfs::read(config.destination.join("index.html")).unwrap(), b"previous build");
    }

    #[test]
    fn test_rebuild_drops_stale_output() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        write(&config.source, "layouts/layout.html", b"<%= content %>");
        write(&config.source, "pages/index.md", b"fresh\n");
        write(&config.destination, "removed.html", b"stale");

        let report = rebuild_site(&config).unwrap();
        assert_eq!(report.pages_written, 1);
        assert!(!config.destination.join("removed.html").exists());
        assert!(stdfs::read_to_string(config.destination.join("index.html")).unwrap().contains("fresh"));
    }

    #[test]
    fn test_clean_site_removes_destination() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        write(&config.destination, "index.html", b"old");

        assert!(clean_site(&config).unwrap());
        assert!(!config.destination.exists());
        assert!(!clean_site(&config).unwrap());
    }
}
