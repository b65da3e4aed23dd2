mod broadcast_envelope;
