//! Global CSS styles for Encore.
//!
//! Dark stage look: charcoal surfaces, a warm amber accent for calls to
//! action, and a teal accent for live data.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --stage-black: #0d0d10;
  --stage-raised: #16161b;
  --stage-border: #26262e;

  /* Accents */
  --amber: #f2a541;
  --amber-glow: rgba(242, 165, 65, 0.3);
  --teal: #2ec4b6;
  --teal-dim: rgba(46, 196, 182, 0.25);

  /* Text */
  --text-primary: #f4f4f6;
  --text-secondary: rgba(244, 244, 246, 0.7);
  --text-muted: rgba(244, 244, 246, 0.45);

  /* Semantic */
  --danger: #ff4d6d;
  --warning: #ffb020;
  --success: #3ddc97;

  /* Typography */
  --font-display: 'Space Grotesk', 'Helvetica Neue', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  font-family: var(--font-body);
  background: var(--stage-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--amber);
  letter-spacing: 0.02em;
}

.section-header {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 500;
  margin-bottom: 1rem;
}

.body-text { color: var(--text-secondary); }
.text-base { font-size: var(--text-base); }
.text-sm { font-size: var(--text-sm); }
.gap-md { gap: 1.25rem; }
.gap-sm { gap: 0.625rem; }

/* === Navigation Header === */
.nav-header {
  border-bottom: 1px solid var(--stage-border);
  background: var(--stage-raised);
  padding: 1rem 2rem;
}

.nav-header--compact { padding: 0.5rem 1.25rem; }

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
}

.app-title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--amber);
  text-decoration: none;
}

.nav-links { display: flex; gap: 1.5rem; }

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover, .nav-link.active { color: var(--text-primary); }
.nav-link.active { border-bottom: 2px solid var(--amber); }

.density-toggle {
  background: transparent;
  border: 1px solid var(--stage-border);
  border-radius: 999px;
  color: var(--text-secondary);
  padding: 0.25rem 0.75rem;
  font-size: var(--text-xs);
  text-transform: capitalize;
  cursor: pointer;
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost, .btn-destructive {
  border-radius: 8px;
  font-weight: 600;
  cursor: pointer;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.btn--md { padding: 0.75rem 1.5rem; font-size: var(--text-base); }
.btn--sm { padding: 0.4rem 0.9rem; font-size: var(--text-sm); }

.btn-primary { background: var(--amber); color: var(--stage-black); border: none; }
.btn-secondary { background: transparent; color: var(--amber); border: 1px solid var(--amber); }
.btn-ghost { background: transparent; color: var(--text-secondary); border: none; }
.btn-destructive { background: var(--danger); color: var(--text-primary); border: none; }

button:disabled { opacity: 0.5; cursor: not-allowed; }

/* === Page Layouts === */
.page {
  display: flex;
  flex-direction: column;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

.landing {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 3rem;
  padding: 5rem 2rem;
  text-align: center;
}

.tagline { color: var(--text-secondary); margin-top: 0.5rem; }
.landing-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }

.hero-strip {
  display: grid;
  grid-template-columns: repeat(4, 160px);
  gap: 1rem;
}

.hero-strip__tile { aspect-ratio: 1; border-radius: 8px; }

/* === Summary Cards === */
.summary-cards {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  margin-bottom: 2rem;
}

.summary-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  background: var(--stage-raised);
  border: 1px solid var(--stage-border);
  border-radius: 12px;
  padding: 1.25rem;
}

.summary-card__label { color: var(--text-muted); font-size: var(--text-sm); }
.summary-card__value { font-family: var(--font-display); font-size: var(--text-xl); }
.summary-card__ring { display: flex; align-items: center; gap: 1rem; }

/* === Campaign Table === */
.campaign-table {
  width: 100%;
  border-collapse: collapse;
}

.campaign-table th {
  text-align: left;
  color: var(--text-muted);
  font-weight: 500;
  border-bottom: 1px solid var(--stage-border);
}

.cell--comfortable { padding: 0.9rem 1rem; }
.cell--compact { padding: 0.4rem 0.6rem; }

.campaign-row { cursor: pointer; transition: background var(--transition-fast); }
.campaign-row:hover, .campaign-row--open { background: var(--stage-raised); }
.chevron-cell { width: 2rem; color: var(--text-muted); }
.budget-cell { display: flex; align-items: center; gap: 0.75rem; }

.campaign-detail td { background: var(--stage-raised); padding: 1rem 1.5rem; }
.campaign-detail__body { display: flex; align-items: center; }
.campaign-stats { display: grid; grid-template-columns: auto auto; column-gap: 1.5rem; }
.campaign-stats dt { color: var(--text-muted); }

.status {
  display: inline-block;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
}

.status--draft { background: var(--stage-border); color: var(--text-secondary); }
.status--active { background: var(--teal-dim); color: var(--teal); }
.status--paused { background: rgba(255, 176, 32, 0.2); color: var(--warning); }
.status--completed { background: rgba(61, 220, 151, 0.15); color: var(--success); }

/* === Progress Ring === */
.progress-ring { position: relative; display: inline-flex; align-items: center; justify-content: center; }
.progress-ring__track { stroke: var(--stage-border); }
.progress-ring__arc { stroke: var(--teal); transition: stroke-dashoffset var(--transition-normal); }
.progress-ring__label { position: absolute; font-size: var(--text-xs); }

/* === Audio Visualizer === */
.visualizer { display: flex; align-items: flex-end; gap: 3px; height: 48px; width: 120px; }
.visualizer__bar { flex: 1; background: var(--teal); border-radius: 2px; opacity: 0.5; }
.visualizer--playing .visualizer__bar { opacity: 1; transition: height 120ms linear; }

/* === Release Grid === */
.release-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.release-grid--compact {
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 0.75rem;
}

.release-card {
  background: var(--stage-raised);
  border: 1px solid var(--stage-border);
  border-radius: 12px;
  overflow: hidden;
}

.release-card__art { aspect-ratio: 1; }
.release-card__meta { padding: 0.75rem 1rem; }
.release-card__title { font-size: var(--text-base); }
.release-card__artist, .release-card__details { color: var(--text-muted); font-size: var(--text-sm); }
.release-card__link { color: var(--teal); font-size: var(--text-sm); }

/* === Lazy Images === */
.lazy-image { position: relative; overflow: hidden; background: var(--stage-border); }

.lazy-image .skeleton { position: absolute; inset: 0; }

.lazy-image__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.lazy-image__img--loaded { opacity: 1; }

.lazy-image__error {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.preload-gate {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 0;
}

.preload-gate__label { color: var(--text-muted); font-size: var(--text-sm); }

/* === Skeletons === */
.skeleton {
  background: linear-gradient(90deg, var(--stage-border) 25%, var(--stage-raised) 50%, var(--stage-border) 75%);
  background-size: 200% 100%;
  animation: shimmer 1.4s ease-in-out infinite;
}

.skeleton--line { border-radius: 4px; }
.skeleton--circle { border-radius: 50%; }
.skeleton-text { display: flex; flex-direction: column; }

@keyframes shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}

/* === Checkout === */
.plan-card {
  display: flex;
  flex-direction: column;
  background: var(--stage-raised);
  border: 1px solid var(--amber-glow);
  border-radius: 12px;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.plan-features { padding-left: 1.25rem; color: var(--text-secondary); }

.checkout-notice {
  color: var(--warning);
  font-size: var(--text-sm);
  margin-bottom: 0.75rem;
}

.checkout-form { display: flex; flex-direction: column; max-width: 480px; }
.field-row { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 0.75rem; }
.field { display: flex; flex-direction: column; gap: 0.25rem; color: var(--text-secondary); font-size: var(--text-sm); }

.field input {
  background: var(--stage-black);
  border: 1px solid var(--stage-border);
  border-radius: 6px;
  color: var(--text-primary);
  padding: 0.6rem 0.75rem;
  font-size: var(--text-base);
}

.field input:focus { outline: none; border-color: var(--amber); }

.billing-success { align-items: center; text-align: center; gap: 1.5rem; padding-top: 5rem; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}

.toast {
  min-width: 280px;
  max-width: 380px;
  background: var(--stage-raised);
  border: 1px solid var(--stage-border);
  border-left: 3px solid var(--teal);
  border-radius: 8px;
  padding: 0.75rem 1rem;
  cursor: pointer;
  animation: toast-in 200ms ease-out;
}

.toast--destructive { border-left-color: var(--danger); }
.toast__title { font-weight: 600; }
.toast__description { color: var(--text-secondary); font-size: var(--text-sm); }

@keyframes toast-in {
  from { transform: translateY(8px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

/* === Empty States === */
.empty-state {
  padding: 3rem;
  text-align: center;
  color: var(--text-muted);
  border: 1px dashed var(--stage-border);
  border-radius: 12px;
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 720px) {
  .summary-cards { grid-template-columns: 1fr; }
  .hero-strip { grid-template-columns: repeat(2, 140px); }
  .field-row { grid-template-columns: 1fr; }
  .nav-header-inner { flex-wrap: wrap; gap: 0.75rem; }
}
"#;
