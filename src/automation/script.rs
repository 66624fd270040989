//! Automation bridge that shells out to the office applications.
//!
//! Each metric computation runs a small generated script through the Windows
//! script host: the script instantiates the application, opens the document
//! invisibly, reads the metric, then closes the document and quits the
//! application before exiting, so the application can never outlive the
//! strategy invocation. `open_document` only probes whether the identifier
//! can be instantiated; the real session happens inside the metric script.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::{AutomationBridge, AutomationError, DocumentSession, PageMetric};

// Script exit codes, checked before stdout is parsed.
const EXIT_UNAVAILABLE: i32 = 2;
const EXIT_OPEN_FAILED: i32 = 3;
const EXIT_METRIC_FAILED: i32 = 4;

#[derive(Debug, Default)]
pub struct ScriptBridge;

impl ScriptBridge {
    pub fn new() -> Self {
        Self
    }
}

impl AutomationBridge for ScriptBridge {
    fn open_document(
        &self,
        app_id: &str,
        path: &Path,
    ) -> Result<Box<dyn DocumentSession + '_>, AutomationError> {
        if !cfg!(windows) {
            return Err(AutomationError::Unsupported);
        }
        probe(app_id)?;
        Ok(Box::new(ScriptSession {
            app_id: app_id.to_string(),
            path: path.to_path_buf(),
            closed: false,
        }))
    }
}

struct ScriptSession {
    app_id: String,
    path: PathBuf,
    closed: bool,
}

impl DocumentSession for ScriptSession {
    fn compute_metric(&mut self, metric: PageMetric) -> Result<u32, AutomationError> {
        let source = metric_script(&self.app_id, &self.path, metric);
        let output = run_script(&source)?;
        match output.status.code() {
            Some(0) => parse_count(&output),
            Some(EXIT_UNAVAILABLE) => Err(AutomationError::Unavailable {
                app_id: self.app_id.clone(),
                reason: "instantiation failed".to_string(),
            }),
            Some(EXIT_OPEN_FAILED) => Err(AutomationError::OpenFailed {
                app_id: self.app_id.clone(),
                path: self.path.display().to_string(),
            }),
            code => Err(AutomationError::MetricFailed {
                path: self.path.display().to_string(),
                reason: format!("script exited with {code:?}"),
            }),
        }
    }

    fn close(&mut self) -> Result<(), AutomationError> {
        // The metric script quits the application itself; nothing is left to
        // release here beyond marking the session done.
        self.closed = true;
        Ok(())
    }
}

impl Drop for ScriptSession {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.close();
        }
    }
}

fn probe(app_id: &str) -> Result<(), AutomationError> {
    let output = run_script(&probe_script(app_id))?;
    match output.status.code() {
        Some(0) => Ok(()),
        _ => Err(AutomationError::Unavailable {
            app_id: app_id.to_string(),
            reason: "instantiation failed".to_string(),
        }),
    }
}

fn run_script(source: &str) -> Result<Output, AutomationError> {
    let mut file = tempfile::Builder::new()
        .prefix("pagestamp-")
        .suffix(".vbs")
        .tempfile()?;
    file.write_all(source.as_bytes())?;
    let output = Command::new("cscript")
        .arg("//Nologo")
        .arg(file.path())
        .output()?;
    Ok(output)
}

fn parse_count(output: &Output) -> Result<u32, AutomationError> {
    let raw = String::from_utf8_lossy(&output.stdout);
    let raw = raw.trim();
    raw.parse::<u32>().map_err(|_| AutomationError::BadOutput {
        raw: raw.to_string(),
    })
}

/// Doubles embedded quotes for use inside a VBScript string literal.
fn vbs_quote(text: &str) -> String {
    text.replace('"', "\"\"")
}

fn probe_script(app_id: &str) -> String {
    format!(
        r#"On Error Resume Next
Set app = CreateObject("{id}")
If Err.Number <> 0 Then WScript.Quit {unavailable}
app.Quit
WScript.Quit 0
"#,
        id = vbs_quote(app_id),
        unavailable = EXIT_UNAVAILABLE,
    )
}

fn metric_script(app_id: &str, path: &Path, metric: PageMetric) -> String {
    let id = vbs_quote(app_id);
    let doc = vbs_quote(&path.display().to_string());
    match metric {
        PageMetric::WordPages => format!(
            r#"On Error Resume Next
Set app = CreateObject("{id}")
If Err.Number <> 0 Then WScript.Quit {unavailable}
app.Visible = False
Err.Clear
Set doc = app.Documents.Open("{doc}")
If Err.Number <> 0 Then
    app.Quit
    WScript.Quit {open_failed}
End If
doc.Repaginate
Err.Clear
pages = doc.ComputeStatistics(2)
If Err.Number <> 0 Then
    Err.Clear
    pages = doc.BuiltInDocumentProperties("Number of Pages").Value
End If
failed = Err.Number <> 0
doc.Close False
app.Quit
If failed Then WScript.Quit {metric_failed}
WScript.Echo pages
"#,
            id = id,
            doc = doc,
            unavailable = EXIT_UNAVAILABLE,
            open_failed = EXIT_OPEN_FAILED,
            metric_failed = EXIT_METRIC_FAILED,
        ),
        PageMetric::SheetPagesTotal => format!(
            r#"On Error Resume Next
Set app = CreateObject("{id}")
If Err.Number <> 0 Then WScript.Quit {unavailable}
app.Visible = False
app.DisplayAlerts = False
Err.Clear
Set book = app.Workbooks.Open("{doc}")
If Err.Number <> 0 Then
    app.Quit
    WScript.Quit {open_failed}
End If
total = 0
For Each sheet In book.Worksheets
    Err.Clear
    pages = sheet.PageSetup.Pages.Count
    If Err.Number <> 0 Or pages < 1 Then
        Err.Clear
        pages = 1
    End If
    total = total + pages
Next
book.Close False
app.Quit
WScript.Echo total
"#,
            id = id,
            doc = doc,
            unavailable = EXIT_UNAVAILABLE,
            open_failed = EXIT_OPEN_FAILED,
        ),
        PageMetric::SlideCount => format!(
            r#"On Error Resume Next
Set app = CreateObject("{id}")
If Err.Number <> 0 Then WScript.Quit {unavailable}
app.DisplayAlerts = 1
Err.Clear
Set pres = app.Presentations.Open("{doc}", True, False, False)
If Err.Number <> 0 Then
    app.Quit
    WScript.Quit {open_failed}
End If
slides = pres.Slides.Count
failed = Err.Number <> 0
pres.Close
app.Quit
If failed Then WScript.Quit {metric_failed}
WScript.Echo slides
"#,
            id = id,
            doc = doc,
            unavailable = EXIT_UNAVAILABLE,
            open_failed = EXIT_OPEN_FAILED,
            metric_failed = EXIT_METRIC_FAILED,
        ),
    }
}
