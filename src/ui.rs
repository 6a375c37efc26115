use crate::models::{SummaryResponse, Task};

pub fn render_index(summary: &SummaryResponse) -> String {
    let prev = summary.date.pred().map(|day| day.to_string()).unwrap_or_default();
    let next = summary.date.succ().map(|day| day.to_string()).unwrap_or_default();
    let avatar = if summary.profile_image.is_empty() {
        String::from(r#"<div class="avatar empty"></div>"#)
    } else {
        format!(
            r#"<img class="avatar" src="{}" alt="Profile" />"#,
            escape_html(&summary.profile_image)
        )
    };

    // User-supplied values go in last so they are never scanned for placeholders.
    INDEX_HTML
        .replace("{{DATE}}", &summary.date.to_string())
        .replace("{{PREV}}", &prev)
        .replace("{{NEXT}}", &next)
        .replace("{{STREAK}}", &summary.streak.to_string())
        .replace("{{TOTAL}}", &summary.total_score.to_string())
        .replace("{{LEETCODE_STREAK}}", &summary.leetcode_streak.to_string())
        .replace("{{DAY_POINTS}}", &summary.day_points.to_string())
        .replace("{{COMPLETED}}", &summary.completed_count.to_string())
        .replace("{{COUNT}}", &summary.total_count.to_string())
        .replace("{{TASKS}}", &render_tasks(&summary.tasks))
        .replace("{{AVATAR}}", &avatar)
}

fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return String::from(r#"<li class="empty">No tasks yet. Add your first task above!</li>"#);
    }

    tasks
        .iter()
        .map(|task| {
            format!(
                r#"<li class="task{done}" data-id="{id}">
          <button class="check" type="button" data-action="toggle">{mark}</button>
          <span class="text">{text}</span>
          <span class="points">+{points} pts</span>
          <button class="delete" type="button" data-action="delete">Delete</button>
        </li>"#,
                done = if task.completed { " done" } else { "" },
                id = task.id,
                mark = if task.completed { "&#10003;" } else { "&#9675;" },
                text = escape_html(&task.text),
                points = task.points_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Day Planner</title>
  <style>
    :root {
      --bg: #f4f1fb;
      --ink: #2b2a33;
      --accent: #667eea;
      --leet: #ffa116;
      --card: #ffffff;
      --muted: #6b6880;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    main {
      max-width: 960px;
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
      box-shadow: 0 10px 30px rgba(102, 126, 234, 0.12);
    }

    header.card {
      display: flex;
      align-items: center;
      gap: 20px;
      flex-wrap: wrap;
    }

    .avatar {
      width: 64px;
      height: 64px;
      border-radius: 50%;
      object-fit: cover;
    }

    .avatar.empty {
      background: var(--bg);
    }

    .stat {
      display: grid;
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .nav {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .task-list {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      gap: 8px;
    }

    .task {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .task.done .text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .task .text {
      flex: 1;
    }

    .leet-days {
      max-height: 320px;
      overflow-y: auto;
      display: grid;
      gap: 4px;
    }

    .leet-day {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .leet-day.today {
      font-weight: 600;
      color: var(--leet);
    }

    .leet-day.future {
      opacity: 0.5;
    }

    .status[data-type="error"] {
      color: #c0392b;
    }
  </style>
</head>
<body>
  <main>
    <header class="card">
      {{AVATAR}}
      <div class="stat">
        <span class="label">Streak</span>
        <span class="value" id="streak">{{STREAK}} days</span>
      </div>
      <div class="stat">
        <span class="label">Total score</span>
        <span class="value" id="total">{{TOTAL}} pts</span>
      </div>
      <div class="stat">
        <span class="label">LeetCode streak</span>
        <span class="value" id="leet-streak">{{LEETCODE_STREAK}}</span>
      </div>
      <button type="button" id="auth-btn">Sign in</button>
    </header>

    <section class="card">
      <div class="nav">
        <a href="/?date={{PREV}}">&larr;</a>
        <form method="get" action="/">
          <input type="date" name="date" value="{{DATE}}" onchange="this.form.submit()" />
        </form>
        <a href="/?date={{NEXT}}">&rarr;</a>
        <a href="/">Today</a>
      </div>
      <p>{{COMPLETED}} / {{COUNT}} tasks completed &middot; day score {{DAY_POINTS}} pts</p>
      <form id="add-form">
        <input type="text" id="task-text" placeholder="Add a task you completed or plan to do..." />
        <button type="submit">+ Add Task</button>
      </form>
      <ul class="task-list" id="tasks">
        {{TASKS}}
      </ul>
    </section>

    <section class="card">
      <h2>LeetCode Tracker</h2>
      <button type="button" id="leet-today">Today</button>
      <div class="leet-days" id="leet-days"></div>
    </section>

    <div class="status" id="status"></div>
  </main>
  <script>
    const selectedDate = '{{DATE}}';
    const statusEl = document.getElementById('status');
    const authBtn = document.getElementById('auth-btn');
    const leetDaysEl = document.getElementById('leet-days');
    const leetStreakEl = document.getElementById('leet-streak');

    const token = () => localStorage.getItem('planner-admin-token');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderAuth = () => {
      authBtn.textContent = token() ? 'Sign out' : 'Sign in';
    };

    const send = async (method, url, body) => {
      const headers = { 'content-type': 'application/json' };
      if (token()) {
        headers.authorization = `Bearer ${token()}`;
      }
      const res = await fetch(url, {
        method,
        headers,
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res;
    };

    const act = (promise, reload = true) => {
      promise
        .then(() => {
          if (reload) {
            window.location.reload();
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    authBtn.addEventListener('click', () => {
      if (token()) {
        localStorage.removeItem('planner-admin-token');
        setStatus('Signed out. Planner is read-only', 'info');
      } else {
        const entered = window.prompt('Admin token');
        if (entered) {
          localStorage.setItem('planner-admin-token', entered.trim());
          setStatus('Signed in as admin', 'ok');
        }
      }
      renderAuth();
    });

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const text = document.getElementById('task-text').value.trim();
      if (text) {
        act(send('POST', '/api/tasks', { text, date: selectedDate }));
      }
    });

    document.getElementById('tasks').addEventListener('click', (event) => {
      const action = event.target.dataset.action;
      const item = event.target.closest('[data-id]');
      if (!action || !item) {
        return;
      }
      const id = item.dataset.id;
      if (action === 'toggle') {
        act(send('POST', `/api/tasks/${id}/toggle`));
      } else if (action === 'delete') {
        act(send('DELETE', `/api/tasks/${id}`));
      }
    });

    const renderLeetCode = (data) => {
      leetStreakEl.textContent = data.streak;
      leetDaysEl.innerHTML = '';
      data.days.forEach((day) => {
        const row = document.createElement('div');
        row.className = `leet-day${day.is_today ? ' today' : ''}${day.is_future ? ' future' : ''}`;
        const done = day.entry && day.entry.completed;

        const box = document.createElement('button');
        box.type = 'button';
        box.textContent = done ? '✓' : '○';
        box.disabled = day.is_future;
        box.addEventListener('click', () => act(send('POST', '/api/leetcode/toggle', { date: day.date }).then(loadLeetCode), false));

        const count = document.createElement('input');
        count.type = 'number';
        count.min = '0';
        count.max = '99999';
        count.placeholder = '0';
        count.value = day.entry && day.entry.questionCount ? day.entry.questionCount : '';
        count.disabled = day.is_future;
        count.addEventListener('change', () => {
          const value = parseInt(count.value, 10) || 0;
          act(send('POST', '/api/leetcode/count', { date: day.date, count: value }).then(loadLeetCode), false);
        });

        const label = document.createElement('span');
        label.textContent = day.date;

        row.append(label, box, count);
        if (day.is_today) {
          row.id = 'leet-today-row';
        }
        leetDaysEl.append(row);
      });
    };

    const scrollToToday = () => {
      document.getElementById('leet-today-row')?.scrollIntoView({ block: 'center' });
    };

    const loadLeetCode = async () => {
      const res = await fetch('/api/leetcode');
      if (!res.ok) {
        throw new Error('Unable to load LeetCode tracker');
      }
      renderLeetCode(await res.json());
    };

    document.getElementById('leet-today').addEventListener('click', scrollToToday);

    renderAuth();
    loadLeetCode()
      .then(scrollToToday)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::DayKey;

    fn summary(tasks: Vec<Task>) -> SummaryResponse {
        SummaryResponse {
            date: DayKey::from_ymd(2024, 3, 5).unwrap(),
            total_count: tasks.len(),
            completed_count: tasks.iter().filter(|task| task.completed).count(),
            tasks,
            day_points: 0,
            streak: 4,
            total_score: 120,
            leetcode_streak: 2,
            profile_image: String::new(),
        }
    }

    #[test]
    fn renders_navigation_and_figures() {
        let html = render_index(&summary(Vec::new()));
        assert!(html.contains(r#"href="/?date=2024-03-04""#));
        assert!(html.contains(r#"href="/?date=2024-03-06""#));
        assert!(html.contains("4 days"));
        assert!(html.contains("120 pts"));
        assert!(html.contains("No tasks yet"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn escapes_task_text() {
        let task = Task {
            id: 3,
            text: "<script>alert('x')</script>".into(),
            date: DayKey::from_ymd(2024, 3, 5).unwrap(),
            completed: true,
            points: None,
        };
        let html = render_index(&summary(vec![task]));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("+10 pts"));
        assert!(html.contains(r#"class="task done""#));
    }

    #[test]
    fn user_values_are_not_expanded_as_placeholders() {
        let task = Task {
            id: 4,
            text: "{{DATE}} {{AVATAR}}".into(),
            date: DayKey::from_ymd(2024, 3, 5).unwrap(),
            completed: false,
            points: None,
        };
        let mut view = summary(vec![task]);
        view.profile_image = "data:image/png;base64,{{TASKS}}{{DATE}}".into();
        let html = render_index(&view);

        assert!(html.contains("data:image/png;base64,&#123;&#123;TASKS&#125;&#125;&#123;&#123;DATE&#125;&#125;"));
        assert!(html.contains("&#123;&#123;DATE&#125;&#125; &#123;&#123;AVATAR&#125;&#125;"));
        assert_eq!(html.matches(r#"class="avatar""#).count(), 1);
    }
}
