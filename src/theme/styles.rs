//! Global CSS styles for Daily Comfort.
//!
//! Soft pastel palette. Animation lengths line up with the default timing
//! configuration (message fade 300ms, modal close 300ms, page exit 400ms,
//! shake 500ms).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CREAM (Backgrounds) */
  --cream: #fff8f0;
  --cream-deep: #fdeee0;
  --card: #ffffff;

  /* SAGE (Primary) */
  --sage: #7a9e7e;
  --sage-deep: #5b7f5f;
  --sage-glow: rgba(122, 158, 126, 0.3);

  /* BLUSH (Hearts, Accents) */
  --blush: #f4a6b8;
  --blush-deep: #e07a93;

  /* TEXT */
  --text-primary: #3d3a36;
  --text-secondary: rgba(61, 58, 54, 0.7);
  --text-muted: rgba(61, 58, 54, 0.5);

  /* SEMANTIC */
  --danger: #d9534f;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Nunito', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(160deg, var(--cream), var(--cream-deep));
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  transition: opacity 400ms ease, transform 400ms ease;
}

/* === Page Exit === */
body.page-exit {
  opacity: 0;
  transform: translateY(-12px);
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-weight: 500;
  color: var(--sage-deep);
  text-align: center;
}

.tagline {
  font-size: 1rem;
  color: var(--text-secondary);
  text-align: center;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  font-style: italic;
  color: var(--sage);
}

/* === Landing === */
.landing,
.login-page {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 2rem;
}

.landing-card,
.login-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  width: 100%;
  max-width: 360px;
  padding: 2.5rem 2rem;
  background: var(--card);
  border-radius: 24px;
  box-shadow: 0 12px 40px var(--sage-glow);
}

.landing-fox {
  font-size: 3.5rem;
}

.btn-enter,
.login-btn,
.generate-btn {
  display: inline-block;
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 999px;
  background: var(--sage);
  color: #fff;
  font-family: var(--font-sans);
  font-size: 1rem;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-enter:hover,
.login-btn:hover,
.generate-btn:hover {
  background: var(--sage-deep);
  transform: translateY(-1px);
}

.back-link {
  color: var(--text-muted);
  font-size: 0.875rem;
  text-decoration: none;
}

.back-link:hover {
  color: var(--sage-deep);
}

/* === Login === */
.pin-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 2px solid var(--cream-deep);
  border-radius: 12px;
  font-size: 1.5rem;
  letter-spacing: 0.5em;
  text-align: center;
  outline: none;
  transition: border-color var(--transition-fast);
}

.pin-input:focus {
  border-color: var(--sage);
}

.pin-input.shake {
  border-color: var(--danger);
  animation: shake 500ms;
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  20%, 60% { transform: translateX(-8px); }
  40%, 80% { transform: translateX(8px); }
}

.error-message {
  color: var(--danger);
  font-size: 0.875rem;
}

.error-message.hidden {
  visibility: hidden;
}

.login-btn.loading,
.generate-btn.loading {
  opacity: 0.7;
  cursor: wait;
  animation: breathe 1s ease-in-out infinite;
}

@keyframes breathe {
  0%, 100% { opacity: 0.7; }
  50% { opacity: 1; }
}

/* === Heart Burst === */
.heart-burst {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 50;
}

.floating-heart {
  position: absolute;
  bottom: -48px;
  opacity: 0;
  animation-name: float-up;
  animation-timing-function: ease-out;
  animation-fill-mode: forwards;
}

@keyframes float-up {
  0% { transform: translateY(0) scale(0.6); opacity: 0; }
  15% { opacity: 1; }
  100% { transform: translateY(-110vh) scale(1.1); opacity: 0; }
}

/* === Home === */
.home-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  min-height: 100vh;
  padding: 2rem 1.5rem;
}

.home-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  max-width: 420px;
}

.logout-btn {
  padding: 0.4rem 1rem;
  border: 1px solid var(--sage);
  border-radius: 999px;
  background: transparent;
  color: var(--sage-deep);
  cursor: pointer;
}

.message-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  width: 100%;
  max-width: 420px;
  padding: 2rem;
  background: var(--card);
  border-radius: 24px;
  box-shadow: 0 12px 40px var(--sage-glow);
  text-align: center;
}

.daily-message {
  min-height: 4.5rem;
  font-family: var(--font-serif);
  font-size: 1.375rem;
  transition: opacity var(--transition-normal);
}

.fox-clickable {
  border: none;
  background: none;
  font-size: 4rem;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.fox-clickable:hover {
  transform: scale(1.1) rotate(-5deg);
}

.home-footer {
  margin-top: auto;
}

/* === Comfort Modal === */
.comfort-modal {
  display: none;
  position: fixed;
  inset: 0;
  align-items: center;
  justify-content: center;
  background: rgba(61, 58, 54, 0.45);
  z-index: 100;
}

.comfort-modal.active {
  display: flex;
  animation: fade-in var(--transition-normal) forwards;
}

.comfort-modal.active.closing {
  animation: fade-out var(--transition-normal) forwards;
}

.comfort-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  max-width: 340px;
  padding: 2rem;
  background: var(--card);
  border-radius: 24px;
  text-align: center;
}

.comfort-fox {
  font-size: 3rem;
}

.comfort-message {
  font-family: var(--font-serif);
  font-size: 1.25rem;
}

.comfort-close {
  padding: 0.5rem 1.5rem;
  border: none;
  border-radius: 999px;
  background: var(--blush);
  color: #fff;
  cursor: pointer;
}

.comfort-close:hover {
  background: var(--blush-deep);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}
"#;
