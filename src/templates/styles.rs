//! CSS for the editor page.

/// Page styles: sticky status bar, full-height textarea, a print-only
/// mirror of the note text, and dark-mode overrides.
pub const STYLE: &str = r#"
body {
    margin: 0;
    background: #ebeef1;
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    font-family: system-ui, sans-serif;
}
#status-bar {
    padding: 8px 20px;
    background-color: #f0f0f0;
    border-bottom: 1px solid #ddd;
    font-size: 0.9em;
    color: #555;
    position: sticky;
    top: 0;
    z-index: 1000;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
#status-bar .note-title {
    font-weight: bold;
    margin-right: auto;
}
#status-bar .cursor-pos {
    margin-right: 15px;
}
.container {
    padding: 20px;
    flex-grow: 1;
    display: flex;
    flex-direction: column;
}
#content {
    margin: 0;
    padding: 20px;
    overflow-y: auto;
    resize: none;
    width: 100%;
    height: 100%;
    box-sizing: border-box;
    border: 1px solid #ddd;
    outline: none;
    flex-grow: 1;
    font-family: inherit;
    font-size: 1rem;
}
#printable {
    display: none;
}
footer {
    padding: 10px 20px;
    background-color: #f0f0f0;
    border-top: 1px solid #ddd;
    text-align: center;
    font-size: 0.8em;
    color: #777;
}
@media (prefers-color-scheme: dark) {
    body {
        background: #333b4d;
    }
    #status-bar {
        background-color: #2a2e35;
        color: #ccc;
        border-bottom-color: #495265;
    }
    #content {
        background: #24262b;
        color: #fff;
        border-color: #495265;
    }
    footer {
        background-color: #2a2e35;
        color: #aaa;
        border-top-color: #495265;
    }
}
@media print {
    #status-bar, .container, footer {
        display: none;
    }
    #printable {
        display: block;
        white-space: pre-wrap;
        word-break: break-word;
    }
}
"#;
