//! Dashboard Page Module
//! The single embedded HTML page. Controls re-fetch both figures from the
//! JSON endpoints on every change; rendering is delegated to plotly.js.

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Range control scale is fixed at 0..10000 kg, step 500; the thumbs start
// at the dataset's payload bounds reported by /api/meta.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
*{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#f4f6f8;--panel:#ffffff;--border:#dde2e8;--text:#2c3e50;--dim:#7f8c8d;--dark:#212529}
body{background:var(--bg);color:var(--text);font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;font-size:14px}
#navbar{background:var(--dark);color:#fff;padding:12px 20px;font-size:17px;font-weight:600}
#main{display:flex;flex-wrap:wrap;gap:16px;padding:16px;max-width:1400px;margin:0 auto}
.card{background:var(--panel);border:1px solid var(--border);border-radius:6px;padding:16px;box-shadow:0 1px 3px rgba(0,0,0,.06)}
#controls{flex:1 1 260px;max-width:320px}
#controls h2{font-size:15px;margin-bottom:12px}
#controls label{display:block;margin:14px 0 6px;color:var(--dim)}
#site{width:100%;padding:6px;border:1px solid var(--border);border-radius:4px}
input[type=range]{width:100%}
#marks{display:flex;justify-content:space-between;color:var(--dim);font-size:11px}
#range-label{margin-top:6px;font-size:12px;color:var(--dim)}
#pie-card{flex:3 1 480px}
#scatter-card{flex:1 1 100%}
.chart{width:100%;height:420px}
</style>
</head>
<body>
<div id="navbar">Launch Records Dashboard</div>
<div id="main">
  <div id="controls" class="card">
    <h2>Filters</h2>
    <label for="site">Launch site</label>
    <select id="site"></select>
    <label>Payload range (kg)</label>
    <input type="range" id="low" min="0" max="10000" step="500">
    <input type="range" id="high" min="0" max="10000" step="500">
    <div id="marks"><span>0</span><span>2500</span><span>5000</span><span>7500</span><span>10000</span></div>
    <div id="range-label"></div>
  </div>
  <div id="pie-card" class="card"><div id="pie" class="chart"></div></div>
  <div id="scatter-card" class="card"><div id="scatter" class="chart"></div></div>
</div>
<script>
const $ = id => document.getElementById(id);
const plotConfig = {displayModeBar: false, responsive: true};

async function getJSON(url) {
  const res = await fetch(url);
  if (!res.ok) throw new Error(url + ': ' + res.status);
  return res.json();
}

function rangeValues() {
  let low = Number($('low').value), high = Number($('high').value);
  if (low > high) [low, high] = [high, low];
  return [low, high];
}

async function refresh() {
  const site = encodeURIComponent($('site').value);
  const [low, high] = rangeValues();
  $('range-label').textContent = low + ' – ' + high + ' kg';
  const [pie, scatter] = await Promise.all([
    getJSON('/api/pie?site=' + site),
    getJSON('/api/scatter?site=' + site + '&low=' + low + '&high=' + high),
  ]);
  Plotly.react('pie', pie.data, pie.layout, plotConfig);
  Plotly.react('scatter', scatter.data, scatter.layout, plotConfig);
}

async function init() {
  const meta = await getJSON('/api/meta');
  const select = $('site');
  const all = document.createElement('option');
  all.value = 'ALL';
  all.textContent = 'All Sites';
  select.appendChild(all);
  for (const site of meta.sites) {
    const opt = document.createElement('option');
    opt.value = site;
    opt.textContent = site;
    select.appendChild(opt);
  }
  $('low').value = Math.floor(meta.payload_min / 500) * 500;
  $('high').value = Math.ceil(meta.payload_max / 500) * 500;
  select.addEventListener('change', refresh);
  $('low').addEventListener('input', refresh);
  $('high').addEventListener('input', refresh);
  await refresh();
}

init().catch(err => { $('range-label').textContent = String(err); });
</script>
</body>
</html>
"#;
