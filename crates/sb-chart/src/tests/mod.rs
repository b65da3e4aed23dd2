mod sample_buffer;
mod stream_chart;
