pub(super) const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SpaceX Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 { text-align: center; color: #503D36; }
        .controls {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        label { font-weight: 600; display: block; margin: 10px 0 5px; color: #555; }
        select, input[type=range] { width: 100%; }
        .range-row { display: flex; gap: 10px; align-items: center; }
        .range-row span { min-width: 80px; text-align: right; }
        .marks { display: flex; justify-content: space-between; color: #888; font-size: 12px; }
        .graph {
            background: white;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
            min-height: 450px;
        }
    </style>
</head>
<body>
    <h1 id="title">SpaceX Launch Records Dashboard</h1>

    <div class="controls">
        <label for="site-dropdown">Launch site</label>
        <input id="site-search" type="search">
        <select id="site-dropdown"></select>

        <label>Payload range (Kg)</label>
        <div id="payload-slider">
            <div class="range-row"><span>From</span><input id="payload-low" type="range"><span id="payload-low-value"></span></div>
            <div class="range-row"><span>To</span><input id="payload-high" type="range"><span id="payload-high-value"></span></div>
            <div class="marks" id="payload-marks"></div>
        </div>
    </div>

    <div class="graph" id="success-pie-chart"></div>
    <div class="graph" id="success-payload-scatter-chart"></div>

    <script>
        const siteDropdown = document.getElementById('site-dropdown');
        const siteSearch = document.getElementById('site-search');
        const payloadLow = document.getElementById('payload-low');
        const payloadHigh = document.getElementById('payload-high');
        let siteOptions = [];
        let slider = null;
        let payloadRange = [0, 0];

        // Native range inputs use step="any"; stepping happens here so both bounds stay reachable.
        function snap(value) {
            if (value <= slider.min + slider.step / 2) return slider.min;
            if (value >= slider.max - slider.step / 2) return slider.max;
            const stepped = slider.min + Math.round((value - slider.min) / slider.step) * slider.step;
            return Math.min(Math.max(stepped, slider.min), slider.max);
        }

        function currentSelection() {
            return {
                site: siteDropdown.value,
                payload_range: payloadRange
            };
        }

        function showRange(range) {
            document.getElementById('payload-low-value').textContent = range[0];
            document.getElementById('payload-high-value').textContent = range[1];
        }

        function sliderRange() {
            return [snap(Number(payloadLow.value)), snap(Number(payloadHigh.value))];
        }

        async function update(changed) {
            const response = await fetch('/api/update', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ changed, ...currentSelection() })
            });
            if (!response.ok) {
                console.error('Update failed:', response.status);
                return;
            }
            const body = await response.json();
            body.outputs.forEach(update => {
                Plotly.react(update.output, update.figure.data, update.figure.layout, { responsive: true });
            });
        }

        // The selected site always stays in the list so the dropdown never drifts from the charts.
        function renderOptions(filter) {
            const selected = siteDropdown.value;
            const needle = filter.toLowerCase();
            siteDropdown.replaceChildren(...siteOptions
                .filter(o => o.value === 'ALL' || o.value === selected || o.label.toLowerCase().includes(needle))
                .map(o => new Option(o.label, o.value)));
            siteDropdown.value = selected;
        }

        async function init() {
            const layout = await (await fetch('/api/layout')).json();
            document.getElementById('title').textContent = layout.title;

            const dropdown = layout.site_dropdown;
            siteOptions = dropdown.options;
            siteSearch.placeholder = dropdown.placeholder;
            siteSearch.hidden = !dropdown.searchable;
            siteDropdown.replaceChildren(...siteOptions.map(o => new Option(o.label, o.value)));
            siteDropdown.value = dropdown.value;

            slider = layout.payload_slider;
            payloadRange = [slider.value[0], slider.value[1]];
            [payloadLow, payloadHigh].forEach((input, i) => {
                input.min = slider.min;
                input.max = slider.max;
                input.step = 'any';
                input.value = payloadRange[i];
            });
            document.getElementById('payload-marks').replaceChildren(...slider.marks.map(m => {
                const mark = document.createElement('span');
                mark.textContent = m.label;
                return mark;
            }));
            showRange(payloadRange);

            siteSearch.addEventListener('input', () => renderOptions(siteSearch.value));
            siteDropdown.addEventListener('change', () => update(['site-dropdown']));
            [payloadLow, payloadHigh].forEach(input => {
                input.addEventListener('input', () => showRange(sliderRange()));
                input.addEventListener('change', () => {
                    payloadRange = sliderRange();
                    payloadLow.value = payloadRange[0];
                    payloadHigh.value = payloadRange[1];
                    showRange(payloadRange);
                    update(['payload-slider']);
                });
            });

            await update([]);
        }

        init();
    </script>
</body>
</html>
"##;
