//! Widget Renderer
//!
//! Builds the self-contained storefront snippet: a `<style>` block, the
//! floating button + popup markup, and the behaviour script. The snippet
//! assumes nothing about the host page; all hooks are `wa-widget-*`
//! ids/classes and the script is a single IIFE.

use chrono::NaiveTime;

use shared::models::{ButtonStyle, Contact, SettingsWithContacts, WidgetPosition, WidgetSettings};

use crate::widget::availability::is_available;

/// Dot color for a contact currently inside its availability window
const DOT_AVAILABLE: &str = "#25D366";
/// Dot color for a contact outside its window
const DOT_UNAVAILABLE: &str = "#ccc";
/// Popup header color (fixed WhatsApp-brand green)
const HEADER_COLOR: &str = "#075E54";

const ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg";

/// A fully rendered storefront snippet
#[derive(Debug, Clone)]
pub struct RenderedWidget {
    /// Self-contained HTML: style + markup + script
    pub html: String,
}

/// Renders widget snippets from a settings record.
pub struct WidgetRenderer;

impl WidgetRenderer {
    /// Render the snippet, or `None` when the widget is disabled.
    ///
    /// `now` is the wall-clock time used for the initial availability dots;
    /// the embedded script re-evaluates them client-side afterwards.
    pub fn render(record: &SettingsWithContacts, now: NaiveTime) -> Option<RenderedWidget> {
        if !record.settings.is_enabled {
            return None;
        }

        let style = Self::render_style(&record.settings);
        let popup = Self::render_popup(&record.contacts, now);
        let button = Self::render_button();

        let html = format!(
            "{style}\n<div id=\"wa-widget-root\">\n{popup}\n{button}\n</div>\n<script>{script}</script>\n",
            script = BEHAVIOUR_SCRIPT,
        );
        Some(RenderedWidget { html })
    }

    fn render_style(settings: &WidgetSettings) -> String {
        let side = settings.position.as_str();
        let color = escape_html(&settings.color);
        let shape = match settings.button_style {
            ButtonStyle::Circle => "width: 60px;\n  height: 60px;\n  border-radius: 50%;".to_string(),
            ButtonStyle::Edge => {
                // The tab hugs the configured edge, so the radius only rounds
                // the side facing the page
                let radius = match settings.position {
                    WidgetPosition::Right => "28px 0 0 28px",
                    WidgetPosition::Left => "0 28px 28px 0",
                };
                format!("width: 80px;\n  height: 55px;\n  border-radius: {radius};")
            }
        };

        format!(
            r#"<style>
.wa-widget-button {{
  position: fixed;
  bottom: 25px;
  {side}: 25px;
  {shape}
  background-color: {color};
  border: none;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
  transition: transform 0.2s ease;
  z-index: 9999;
}}
.wa-widget-button:hover {{
  transform: scale(1.1);
}}
.wa-widget-button img {{
  width: 32px;
  height: 32px;
}}
.wa-widget-popup {{
  position: fixed;
  bottom: 100px;
  {side}: 25px;
  width: 350px;
  max-width: 90vw;
  background: #fff;
  border-radius: 10px;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
  overflow: hidden;
  opacity: 0;
  transform: translateY(10px);
  pointer-events: none;
  transition: opacity 0.2s ease, transform 0.2s ease;
  z-index: 10000;
}}
.wa-widget-popup.wa-widget-open {{
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}}
.wa-widget-header {{
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px 16px;
  background-color: {header};
  color: #fff;
  font-weight: 600;
}}
.wa-widget-close {{
  background: none;
  border: none;
  color: #fff;
  font-size: 20px;
  line-height: 1;
  cursor: pointer;
  padding: 0;
}}
.wa-widget-contact {{
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 12px 16px;
  text-decoration: none;
  color: #222;
  border-bottom: 1px solid #eee;
}}
.wa-widget-contact:last-child {{
  border-bottom: none;
}}
.wa-widget-contact:hover {{
  background-color: #f7f7f7;
}}
.wa-widget-dot {{
  width: 10px;
  height: 10px;
  border-radius: 50%;
  flex-shrink: 0;
}}
.wa-widget-name {{
  display: block;
  font-weight: 600;
}}
.wa-widget-subtitle {{
  display: block;
  font-size: 12px;
  color: #666;
}}
.wa-widget-hours {{
  display: block;
  font-size: 12px;
  color: #999;
}}
</style>"#,
            header = HEADER_COLOR,
        )
    }

    fn render_button() -> String {
        format!(
            "<button id=\"wa-widget-button\" class=\"wa-widget-button\" type=\"button\" aria-label=\"Chat on WhatsApp\">\
             <img src=\"{ICON_URL}\" alt=\"WhatsApp\" width=\"32\" height=\"32\"></button>"
        )
    }

    fn render_popup(contacts: &[Contact], now: NaiveTime) -> String {
        let rows: String = contacts
            .iter()
            .map(|c| Self::render_contact_row(c, now))
            .collect();

        format!(
            "<div id=\"wa-widget-popup\" class=\"wa-widget-popup\">\
             <div class=\"wa-widget-header\"><span>Contact Us</span>\
             <button id=\"wa-widget-close\" class=\"wa-widget-close\" type=\"button\" aria-label=\"Close\">&times;</button>\
             </div><div class=\"wa-widget-body\">{rows}</div></div>"
        )
    }

    fn render_contact_row(contact: &Contact, now: NaiveTime) -> String {
        let digits = digits_only(&contact.number);
        let available = is_available(
            now,
            contact.start_time.as_deref(),
            contact.end_time.as_deref(),
        );
        let dot_color = if available {
            DOT_AVAILABLE
        } else {
            DOT_UNAVAILABLE
        };

        let mut attrs = String::new();
        if let Some(start) = &contact.start_time {
            attrs.push_str(&format!(" data-start=\"{}\"", escape_html(start)));
        }
        if let Some(end) = &contact.end_time {
            attrs.push_str(&format!(" data-end=\"{}\"", escape_html(end)));
        }

        let mut lines = format!(
            "<span class=\"wa-widget-name\">{}</span>",
            escape_html(&contact.name)
        );
        if let Some(subtitle) = &contact.subtitle {
            lines.push_str(&format!(
                "<span class=\"wa-widget-subtitle\">{}</span>",
                escape_html(subtitle)
            ));
        }
        if let Some(display_time) = &contact.display_time {
            lines.push_str(&format!(
                "<span class=\"wa-widget-hours\">{}</span>",
                escape_html(display_time)
            ));
        }

        format!(
            "<a class=\"wa-widget-contact\" data-contact href=\"https://wa.me/{digits}\" \
             target=\"_blank\" rel=\"noopener noreferrer\"{attrs}>\
             <span class=\"wa-widget-dot\" style=\"background-color: {dot_color};\"></span>\
             <span>{lines}</span></a>"
        )
    }
}

/// Remove every non-digit character; the remainder feeds the wa.me link.
fn digits_only(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Escape text for HTML body and attribute contexts.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Runs on the storefront. Toggles the popup and refreshes the availability
// dots once a minute; the timer stops on pagehide so a render instance never
// leaks its interval.
const BEHAVIOUR_SCRIPT: &str = r#"(function() {
  var root = document.getElementById('wa-widget-root');
  if (!root) return;
  var button = document.getElementById('wa-widget-button');
  var popup = document.getElementById('wa-widget-popup');
  var close = document.getElementById('wa-widget-close');
  button.addEventListener('click', function() {
    popup.classList.toggle('wa-widget-open');
  });
  close.addEventListener('click', function() {
    popup.classList.remove('wa-widget-open');
  });
  function isAvailable(start, end) {
    if (!start || !end) return true;
    var sp = start.split(':');
    var ep = end.split(':');
    var s = new Date();
    s.setHours(parseInt(sp[0], 10), parseInt(sp[1], 10), 0, 0);
    var e = new Date();
    e.setHours(parseInt(ep[0], 10), parseInt(ep[1], 10), 0, 0);
    var now = new Date();
    return now >= s && now <= e;
  }
  function refresh() {
    var rows = root.querySelectorAll('[data-contact]');
    for (var i = 0; i < rows.length; i++) {
      var dot = rows[i].querySelector('.wa-widget-dot');
      if (!dot) continue;
      var ok = isAvailable(rows[i].getAttribute('data-start'), rows[i].getAttribute('data-end'));
      dot.style.backgroundColor = ok ? '#25D366' : '#ccc';
    }
  }
  refresh();
  var timer = setInterval(refresh, 60000);
  window.addEventListener('pagehide', function() {
    clearInterval(timer);
  });
})();"#;
