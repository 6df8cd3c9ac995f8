pub const HOME_STYLES: &str = r#"
section.page-section {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--header-height);
}

.hero {
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
}

.hero-title {
  font-size: clamp(2.5rem, 6vw, 4rem);
  font-weight: 700;
  line-height: 1.1;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin: var(--space-4) 0 var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  flex-wrap: wrap;
}

.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-8);
}

.contact-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.skills-grid, .projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-6);
}

.skill-items {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-3);
}

/* Experience timeline */
.timeline {
  display: grid;
  grid-template-columns: 220px 1fr;
  gap: var(--space-6);
}

.timeline-tabs {
  display: flex;
  flex-direction: column;
  border-left: 2px solid var(--border);
}

.timeline-tab {
  text-align: left;
  background: none;
  border: none;
  padding: var(--space-3) var(--space-4);
  color: var(--text-secondary);
  cursor: pointer;
  margin-left: -2px;
  border-left: 2px solid transparent;
}

.timeline-tab.active {
  color: var(--primary);
  border-left-color: var(--primary);
}

.timeline-period {
  color: var(--text-tertiary);
  font-size: 0.9rem;
}

/* Projects */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.filter-btn.active {
  background-color: var(--primary);
  color: #FFFFFF;
}

.project-count {
  color: var(--text-tertiary);
  margin-bottom: var(--space-4);
}

.project-card[hidden] {
  display: none;
}

.project-techs {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

/* Resume */
.resume {
  max-width: 800px;
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.resume-header { text-align: center; margin-bottom: var(--space-6); }
.resume h2 { border-bottom: 1px solid var(--border); margin-top: var(--space-6); }
.resume li { margin-left: var(--space-6); }

.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-tertiary);
  border-top: 1px solid var(--border);
}

@media (max-width: 767px) {
  .about-grid, .timeline { grid-template-columns: 1fr; }
  .timeline-tabs { flex-direction: row; overflow-x: auto; border-left: none; }
}

@media print {
  .app-header, .scroll-progress, .resume-actions, .site-footer { display: none; }
  body { background: #FFFFFF; color: #000000; }
}
"#;
