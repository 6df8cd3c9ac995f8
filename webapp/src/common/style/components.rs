pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
}

.btn:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-secondary {
  background-color: transparent;
  color: var(--text-primary);
  border-color: var(--border);
}

.btn-secondary:hover {
  background-color: var(--surface-raised);
  text-decoration: none;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

/* Scroll progress */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  background: linear-gradient(90deg, var(--primary), var(--accent));
  z-index: 100;
  transition: width 50ms linear;
}

/* Theme toggle */
.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  width: 36px;
  height: 36px;
  cursor: pointer;
  color: var(--text-primary);
  font-size: 1rem;
}

/* Mobile menu */
.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: var(--space-2);
}

.hamburger span {
  width: 24px;
  height: 2px;
  background-color: var(--text-primary);
  transition: transform var(--transition-normal) var(--easing-standard),
              opacity var(--transition-normal) var(--easing-standard);
}

.hamburger.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.open span:nth-child(2) { opacity: 0; }
.hamburger.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.nav-overlay {
  display: none;
}

@media (max-width: 767px) {
  .hamburger { display: flex; }

  .nav-links {
    position: fixed;
    top: var(--header-height);
    right: 0;
    bottom: 0;
    width: 70%;
    flex-direction: column;
    padding: var(--space-6);
    background-color: var(--surface);
    transform: translateX(100%);
    transition: transform var(--transition-normal) var(--easing-standard);
    z-index: 20;
  }

  .nav-links.open { transform: translateX(0); }

  .nav-overlay.open {
    display: block;
    position: fixed;
    inset: var(--header-height) 0 0 0;
    background-color: var(--overlay);
    z-index: 15;
  }
}

/* Scroll reveal */
.reveal {
  opacity: 0;
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal.slide-up {
  transform: translateY(24px);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal, .reveal.slide-up { opacity: 1; transform: none; transition: none; }
  .scroll-progress { transition: none; }
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-group label {
  font-weight: 500;
  color: var(--text-secondary);
}

.form-group input, .form-group textarea {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-group input:focus, .form-group textarea:focus {
  outline: none;
  border-color: var(--primary);
}

.form-group.invalid input, .form-group.invalid textarea {
  border-color: var(--error);
}

.field-error {
  color: var(--error);
  font-size: 0.875rem;
}

.form-status {
  margin-top: var(--space-4);
  padding: var(--space-3);
  border-radius: var(--radius-md);
}

.form-status.success { color: var(--success); border: 1px solid var(--success); }
.form-status.error { color: var(--error); border: 1px solid var(--error); }

/* Cards and tags */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  box-shadow: var(--shadow-sm);
}

.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  font-size: 0.8rem;
}
"#;
