// Static CSS and JS for the report page.
//
// The page is fully self-contained: records are embedded as JSON and the
// grid is built client-side, so every record stays available for filter
// toggling no matter what the default view hides. Manual star ratings
// live in localStorage under the stable clip id and survive re-runs.

pub const STYLE: &str = r##"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif; background: #0f172a; color: #e2e8f0; padding: 24px; }
h1 { font-size: 28px; margin-bottom: 8px; }
.subtitle { color: #94a3b8; margin-bottom: 24px; font-size: 14px; }
.notice { background: #1e3a5f; border: 1px solid #3b82f6; border-radius: 8px; padding: 10px 16px; margin-bottom: 20px; font-size: 13px; }
.summary { display: flex; gap: 24px; margin-bottom: 24px; flex-wrap: wrap; }
.stat { background: #1e293b; padding: 16px 20px; border-radius: 10px; }
.stat-value { font-size: 24px; font-weight: 700; }
.stat-label { font-size: 12px; color: #94a3b8; margin-top: 2px; }
.controls { display: flex; gap: 12px; margin-bottom: 24px; flex-wrap: wrap; align-items: center; }
.controls label { color: #94a3b8; font-size: 13px; }
.controls select { background: #1e293b; color: #e2e8f0; border: 1px solid #334155; border-radius: 6px; padding: 5px 8px; font-size: 13px; }
.controls input[type=range] { accent-color: #3b82f6; }
.filter-btn { padding: 6px 16px; border-radius: 20px; border: 1px solid #334155; background: #1e293b; color: #e2e8f0; cursor: pointer; font-size: 13px; transition: all 0.15s; }
.filter-btn:hover { background: #334155; }
.filter-btn.active { background: #3b82f6; border-color: #3b82f6; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(500px, 1fr)); gap: 16px; }
.clip { background: #1e293b; border-radius: 12px; overflow: hidden; transition: transform 0.15s; }
.clip:hover { transform: translateY(-2px); }
.sheet-wrap { position: relative; }
.sheet-wrap img { width: 100%; display: block; }
.scrub { display: none; position: absolute; inset: 0; background-repeat: no-repeat; background-size: 400% 100%; }
.no-sheet { padding: 40px; text-align: center; color: #475569; font-size: 13px; background: #0f172a; }
.clip-info { padding: 12px 16px; display: flex; justify-content: space-between; align-items: center; }
.clip-name { font-size: 13px; font-weight: 500; word-break: break-all; flex: 1; margin-right: 12px; }
.clip-meta { display: flex; gap: 8px; align-items: center; flex-shrink: 0; }
.score-badge { display: inline-flex; align-items: center; justify-content: center; width: 32px; height: 32px; border-radius: 8px; font-weight: 700; font-size: 16px; color: #0f172a; }
.duration { font-size: 12px; color: #94a3b8; }
.team-dot { width: 14px; height: 14px; border-radius: 50%; border: 2px solid #334155; flex-shrink: 0; }
.team-chip-dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 4px; }
.stars { font-size: 15px; letter-spacing: 1px; cursor: pointer; user-select: none; }
.stars .star { color: #475569; }
.stars .star.filled { color: inherit; }
.stars.overridden { text-shadow: 0 0 6px #3b82f6; }
.pending .stars, .pending .score-badge { opacity: 0.35; }
video { width: 100%; max-height: 360px; background: #000; }
.play-btn { font-size: 12px; padding: 4px 12px; border-radius: 6px; background: #334155; color: #e2e8f0; border: none; cursor: pointer; }
.play-btn:hover { background: #475569; }
"##;

pub const SCRIPT: &str = r##"
const SCORE_COLORS = { 5: "#22c55e", 4: "#84cc16", 3: "#eab308", 2: "#f97316", 1: "#ef4444" };
const UI_KEY = "hooptriage.ui";

function ratingKey(id) { return "hooptriage.rating." + id; }

function loadRatings() {
    const out = {};
    for (const c of CLIPS) {
        const v = parseInt(localStorage.getItem(ratingKey(c.id)) || "", 10);
        if (v >= 1 && v <= 5) out[c.id] = v;
    }
    return out;
}

let ratings = loadRatings();

let ui = { sort: "score", score: MIN_SCORE > 0 ? "min" : "all", team: null, grid: 500 };
try {
    const saved = JSON.parse(localStorage.getItem(UI_KEY) || "null");
    if (saved) ui = Object.assign(ui, saved);
} catch (e) { /* corrupt state, keep defaults */ }

function saveUi() { localStorage.setItem(UI_KEY, JSON.stringify(ui)); }

function effectiveScore(c) { return ratings[c.id] || c.score; }

function passesFilters(c) {
    const eff = effectiveScore(c);
    if (ui.score === "min") { if (eff < MIN_SCORE) return false; }
    else if (ui.score !== "all") { if (eff !== ui.score) return false; }
    if (ui.team && c.team_color !== ui.team) return false;
    return true;
}

function sortedClips() {
    const clips = CLIPS.slice();
    if (ui.sort === "duration") {
        clips.sort((a, b) => b.duration_secs - a.duration_secs || a.filename.localeCompare(b.filename));
    } else if (ui.sort === "name") {
        clips.sort((a, b) => a.filename.localeCompare(b.filename));
    } else {
        clips.sort((a, b) => effectiveScore(b) - effectiveScore(a) || a.filename.localeCompare(b.filename));
    }
    return clips;
}

function updateSummary() {
    const scores = CLIPS.map(effectiveScore);
    document.getElementById("stat-total").textContent = CLIPS.length;
    document.getElementById("stat-hot").textContent = scores.filter(s => s >= 4).length;
    document.getElementById("stat-skip").textContent = scores.filter(s => s <= 2).length;
    const minutes = CLIPS.reduce((acc, c) => acc + c.duration_secs, 0) / 60;
    document.getElementById("stat-minutes").textContent = minutes.toFixed(0) + "m";
}

function chip(label, active, onclick) {
    const btn = document.createElement("button");
    btn.className = "filter-btn" + (active ? " active" : "");
    btn.textContent = label;
    btn.onclick = onclick;
    return btn;
}

function renderControls() {
    const controls = document.getElementById("controls");
    controls.innerHTML = "";

    const sortLabel = document.createElement("label");
    sortLabel.textContent = "Sort:";
    controls.appendChild(sortLabel);

    const sortSel = document.createElement("select");
    for (const [value, label] of [["score", "Score"], ["duration", "Duration"], ["name", "Name"]]) {
        const opt = document.createElement("option");
        opt.value = value;
        opt.textContent = label;
        if (ui.sort === value) opt.selected = true;
        sortSel.appendChild(opt);
    }
    sortSel.onchange = () => { ui.sort = sortSel.value; saveUi(); render(); };
    controls.appendChild(sortSel);

    const scoreLabel = document.createElement("label");
    scoreLabel.textContent = "Score:";
    controls.appendChild(scoreLabel);

    controls.appendChild(chip("All", ui.score === "all", () => { ui.score = "all"; saveUi(); render(); }));
    if (MIN_SCORE > 0) {
        controls.appendChild(chip("≥" + MIN_SCORE + "★", ui.score === "min", () => { ui.score = "min"; saveUi(); render(); }));
    }
    for (const s of [5, 4, 3, 2, 1]) {
        const btn = chip(s + "★", ui.score === s, () => { ui.score = s; saveUi(); render(); });
        btn.style.borderColor = SCORE_COLORS[s] + "50";
        controls.appendChild(btn);
    }

    const teams = [...new Set(CLIPS.map(c => c.team_color).filter(Boolean))].sort();
    if (teams.length > 0) {
        const teamLabel = document.createElement("label");
        teamLabel.textContent = "Team:";
        teamLabel.style.marginLeft = "12px";
        controls.appendChild(teamLabel);

        controls.appendChild(chip("All", !ui.team, () => { ui.team = null; saveUi(); render(); }));
        for (const team of teams) {
            const btn = chip(team, ui.team === team, () => { ui.team = team; saveUi(); render(); });
            const dot = document.createElement("span");
            dot.className = "team-chip-dot";
            dot.style.background = team;
            btn.prepend(dot);
            controls.appendChild(btn);
        }
    }

    const gridLabel = document.createElement("label");
    gridLabel.textContent = "Grid:";
    gridLabel.style.marginLeft = "12px";
    controls.appendChild(gridLabel);

    const slider = document.createElement("input");
    slider.type = "range";
    slider.min = "320";
    slider.max = "720";
    slider.value = ui.grid;
    slider.oninput = () => {
        ui.grid = parseInt(slider.value, 10);
        document.getElementById("clip-grid").style.gridTemplateColumns =
            "repeat(auto-fill, minmax(" + ui.grid + "px, 1fr))";
        saveUi();
    };
    controls.appendChild(slider);
}

function starRow(c) {
    const row = document.createElement("span");
    const eff = effectiveScore(c);
    row.className = "stars" + (ratings[c.id] ? " overridden" : "");
    row.style.color = SCORE_COLORS[eff] || "#64748b";
    row.title = ratings[c.id]
        ? "Manual rating (click the same star to clear)"
        : "Click to set a manual rating";

    for (let s = 1; s <= 5; s++) {
        const star = document.createElement("span");
        star.className = "star" + (s <= eff ? " filled" : "");
        star.textContent = s <= eff ? "★" : "☆";
        star.onclick = () => {
            if (ratings[c.id] === s) {
                delete ratings[c.id];
                localStorage.removeItem(ratingKey(c.id));
            } else {
                ratings[c.id] = s;
                localStorage.setItem(ratingKey(c.id), String(s));
            }
            render();
        };
        row.appendChild(star);
    }
    return row;
}

function attachScrub(wrap, c) {
    const overlay = wrap.querySelector(".scrub");
    if (!overlay) return;
    overlay.style.backgroundImage = "url('" + encodeURI(c.contact_sheet) + "')";
    wrap.addEventListener("mousemove", (e) => {
        const rect = wrap.getBoundingClientRect();
        const frac = (e.clientX - rect.left) / rect.width;
        const idx = Math.min(SHEET_FRAMES - 1, Math.max(0, Math.floor(frac * SHEET_FRAMES)));
        overlay.style.backgroundPosition = (idx * 100 / (SHEET_FRAMES - 1)) + "% 50%";
        overlay.style.display = "block";
    });
    wrap.addEventListener("mouseleave", () => { overlay.style.display = "none"; });
}

function playClip(btn, clipEl, path) {
    let video = clipEl.querySelector("video");
    if (video) {
        video.remove();
        btn.textContent = "▶ Play";
        return;
    }
    video = document.createElement("video");
    video.src = "file://" + path;
    video.controls = true;
    video.autoplay = true;
    clipEl.insertBefore(video, clipEl.querySelector(".clip-info"));
    btn.textContent = "✕ Close";
}

function clipCard(c) {
    const card = document.createElement("div");
    card.className = "clip" + (c.status === "scanned" ? " pending" : "");

    const wrap = document.createElement("div");
    wrap.className = "sheet-wrap";
    if (c.contact_sheet) {
        const img = document.createElement("img");
        img.src = c.contact_sheet;
        img.loading = "lazy";
        img.alt = c.filename;
        wrap.appendChild(img);

        const overlay = document.createElement("div");
        overlay.className = "scrub";
        wrap.appendChild(overlay);
        attachScrub(wrap, c);
    } else {
        const placeholder = document.createElement("div");
        placeholder.className = "no-sheet";
        placeholder.textContent = c.status === "scanned" ? "Frames pending…" : "No frames extracted";
        wrap.appendChild(placeholder);
    }
    card.appendChild(wrap);

    const info = document.createElement("div");
    info.className = "clip-info";

    const name = document.createElement("span");
    name.className = "clip-name";
    name.textContent = c.filename;
    name.title = c.rel_path;
    info.appendChild(name);

    const meta = document.createElement("div");
    meta.className = "clip-meta";

    if (c.team_color) {
        const dot = document.createElement("span");
        dot.className = "team-dot";
        dot.style.background = c.team_rgb ? "rgb(" + c.team_rgb.join(",") + ")" : c.team_color;
        dot.title = c.team_color;
        meta.appendChild(dot);
    }

    const duration = document.createElement("span");
    duration.className = "duration";
    duration.textContent = c.duration_secs.toFixed(1) + "s";
    meta.appendChild(duration);

    meta.appendChild(starRow(c));

    const eff = effectiveScore(c);
    const badge = document.createElement("span");
    badge.className = "score-badge";
    badge.style.background = SCORE_COLORS[eff] || "#64748b";
    badge.textContent = c.status === "scanned" ? "…" : eff;
    meta.appendChild(badge);

    const play = document.createElement("button");
    play.className = "play-btn";
    play.textContent = "▶ Play";
    play.onclick = () => playClip(play, card, c.path);
    meta.appendChild(play);

    info.appendChild(meta);
    card.appendChild(info);
    return card;
}

function render() {
    renderControls();
    updateSummary();

    const grid = document.getElementById("clip-grid");
    grid.innerHTML = "";
    grid.style.gridTemplateColumns = "repeat(auto-fill, minmax(" + ui.grid + "px, 1fr))";

    for (const c of sortedClips()) {
        if (!passesFilters(c)) continue;
        grid.appendChild(clipCard(c));
    }
}

render();
"##;
