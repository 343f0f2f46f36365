mod notice;
