mod room;
