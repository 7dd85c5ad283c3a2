//! Global CSS styles for the patch notes viewer.
//!
//! Dark terminal palette; the disclosure classes (`item`, `head`, `panel`,
//! `chip`, `group`, `tag`) match the markup produced by `patchnotes-ui` and
//! the static HTML renderer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0a0a0a;
  --bg-card: #0f1214;
  --bg-card-hover: #13171a;
  --border: #1e2428;

  /* Accents */
  --accent: #00d4aa;
  --accent-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;

  /* Group tags */
  --tag-add: #7cb87c;
  --tag-chg: #5f8fff;
  --tag-fix: #ff9f00;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-panel: 300ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.notes-page {
  max-width: 760px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem;
}

.notes-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--gold);
}

.notes-empty {
  color: var(--text-muted);
  font-style: italic;
}

/* === Buttons === */
.btn-primary {
  display: inline-block;
  padding: 0.6rem 1.4rem;
  background: transparent;
  border: 1px solid var(--accent);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  text-decoration: none;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  box-shadow: 0 0 20px var(--accent-glow);
  transform: translateY(-1px);
}

/* === Disclosure List === */
.list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.item {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 6px;
  overflow: hidden;
  transition: border-color var(--transition-fast);
}

.item.open,
.item:hover {
  border-color: var(--accent);
}

.head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.9rem 1.1rem;
  cursor: pointer;
  user-select: none;
}

.head:hover {
  background: var(--bg-card-hover);
}

.head:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: -2px;
}

.head-left {
  display: flex;
  flex-wrap: wrap;
  align-items: baseline;
  gap: 0.6rem;
}

.ver {
  color: var(--accent);
  font-weight: 600;
}

.title {
  color: var(--text-primary);
}

.date {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.chevBtn {
  color: var(--text-secondary);
  transition: transform var(--transition-panel);
}

.item.open .chevBtn {
  transform: rotate(180deg);
}

/* Height is set inline from the measured content */
.panel {
  max-height: 0;
  overflow: hidden;
  padding: 0 1.1rem;
  transition: max-height var(--transition-panel);
}

.item.open .panel {
  padding-bottom: 14px;
}

.hi {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 0.75rem;
}

.chip {
  padding: 0.15rem 0.6rem;
  border: 1px solid var(--gold);
  border-radius: 999px;
  color: var(--gold);
  font-size: var(--text-xs);
}

.group {
  margin-top: 0.75rem;
}

.group ul {
  margin-top: 0.4rem;
  padding-left: 1.25rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.group li + li {
  margin-top: 0.2rem;
}

.tag {
  display: inline-block;
  padding: 0.1rem 0.5rem;
  border-radius: 3px;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.tag.add {
  color: var(--tag-add);
  border: 1px solid var(--tag-add);
}

.tag.chg {
  color: var(--tag-chg);
  border: 1px solid var(--tag-chg);
}

.tag.fix {
  color: var(--tag-fix);
  border: 1px solid var(--tag-fix);
}
"#;
