//! The editor page.
//!
//! A single HTML document: status bar (note title, cursor position, save
//! state), the textarea, a print-only mirror of the note text, and the
//! client-side autosave loop.
//!
//! The autosave loop is one cooperative async task per page. It owns a
//! small state object holding the baseline (the last text known to be on
//! the server) and the visible save state, and it cycles forever:
//! sleep 1s, compare the textarea to the baseline, and if they differ,
//! POST the text to the page's own URL and await completion before the
//! next cycle. At most one save is ever in flight; edits made during a
//! save are picked up by the next cycle's comparison. A completed response
//! counts as saved regardless of status code; only a transport failure
//! enters the error state, and the loop retries indefinitely either way.

use super::styles::STYLE;
use super::html_escape;

pub fn render_editor(name: &str, content: &str) -> String {
    let title = html_escape(name);
    let text = html_escape(content);
    let year = chrono::Local::now().format("%Y");

    format!(
        r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="icon" href="/favicon.svg" type="image/svg+xml">
<style>{style}</style>
</head>
<body>

<div id="status-bar">
    <span class="note-title">Note: {title}</span>
    <span class="cursor-pos">Lines: 1, Cols: 1</span>
    <span class="save-status">Saved</span>
</div>

<div class="container">
<textarea id="content">{text}</textarea>
</div>

<pre id="printable"></pre>

<footer>{year} webpad</footer>

<script>
var textarea = document.getElementById('content');
var printable = document.getElementById('printable');
var saveStatus = document.querySelector('#status-bar .save-status');
var cursorPos = document.querySelector('#status-bar .cursor-pos');

var SAVE_DELAY_MS = 1000;

var sync = {{
    baseline: textarea.value,
    status: 'Saved'
}};

function setStatus(text) {{
    sync.status = text;
    saveStatus.textContent = text;
}}

function sleep(ms) {{
    return new Promise(function(resolve) {{ setTimeout(resolve, ms); }});
}}

function mirrorToPrintable(text) {{
    if (printable.firstChild) {{
        printable.removeChild(printable.firstChild);
    }}
    printable.appendChild(document.createTextNode(text));
}}

async function saveLoop() {{
    for (;;) {{
        await sleep(SAVE_DELAY_MS);
        var current = textarea.value;
        if (current === sync.baseline) {{
            continue;
        }}
        setStatus('Saving...');
        mirrorToPrintable(current);
        try {{
            await fetch(window.location.href, {{
                method: 'POST',
                headers: {{'Content-Type': 'application/x-www-form-urlencoded; charset=UTF-8'}},
                body: 'text=' + encodeURIComponent(current)
            }});
            sync.baseline = current;
            setStatus('Saved');
        }} catch (err) {{
            setStatus('Error saving. Retrying...');
        }}
    }}
}}

function updateCursorDisplay() {{
    var before = textarea.value.substring(0, textarea.selectionStart);
    var line = (before.match(/\n/g) || []).length + 1;
    var lastBreak = before.lastIndexOf('\n');
    var col = lastBreak === -1 ? before.length + 1 : before.length - lastBreak;
    cursorPos.textContent = 'Lines: ' + line + ', Cols: ' + col;
}}

textarea.addEventListener('input', function() {{
    if (textarea.value !== sync.baseline && sync.status === 'Saved') {{
        setStatus('Unsaved changes');
    }}
    updateCursorDisplay();
}});
textarea.addEventListener('keyup', updateCursorDisplay);
textarea.addEventListener('click', updateCursorDisplay);
textarea.addEventListener('focus', updateCursorDisplay);

mirrorToPrintable(sync.baseline);
textarea.focus();
updateCursorDisplay();
saveLoop();
</script>
</body>
</html>
"##,
        title = title,
        style = STYLE,
        text = text,
        year = year,
    )
}

// ============================================================================
// Tests
// ============================================================================
